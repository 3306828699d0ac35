//! Per-category update policies.
//!
//! Each category owns one [`Policy`]: a pair of pure functions computing the
//! next sell-in and the next quality. Quality is always computed from the
//! **already updated** sell-in. Arithmetic saturates at the `i32` limits.

/// Lowest quality a non-legendary item can be brought to by an update.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality an appreciating item can be brought to by an update.
pub const MAX_QUALITY: i32 = 50;

/// Update policy for one item category.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    sell_in: fn(i32) -> i32,
    quality: fn(i32, i32) -> i32,
}

impl Policy {
    /// Sell-in after one day, given the current sell-in.
    pub fn next_sell_in(&self, sell_in: i32) -> i32 {
        (self.sell_in)(sell_in)
    }

    /// Quality after one day, given the current quality and the updated sell-in.
    pub fn next_quality(&self, quality: i32, sell_in: i32) -> i32 {
        (self.quality)(quality, sell_in)
    }
}

pub static STANDARD: Policy = Policy {
    sell_in: decrement,
    quality: standard_decay,
};

pub static LEGENDARY: Policy = Policy {
    sell_in: unchanged,
    quality: keep_quality,
};

pub static RIPENING: Policy = Policy {
    sell_in: decrement,
    quality: ripen,
};

pub static EVENT_TICKET: Policy = Policy {
    sell_in: decrement,
    quality: event_ticket,
};

pub static ACCELERATED: Policy = Policy {
    sell_in: decrement,
    quality: accelerated_decay,
};

fn decrement(sell_in: i32) -> i32 {
    sell_in.saturating_sub(1)
}

fn unchanged(sell_in: i32) -> i32 {
    sell_in
}

/// 1 on or before the sell-by date, 2 once past it.
fn daily_step(sell_in: i32) -> i32 {
    if sell_in >= 0 { 1 } else { 2 }
}

fn standard_decay(quality: i32, sell_in: i32) -> i32 {
    quality.saturating_sub(daily_step(sell_in)).max(MIN_QUALITY)
}

fn keep_quality(quality: i32, _sell_in: i32) -> i32 {
    quality
}

fn ripen(quality: i32, sell_in: i32) -> i32 {
    quality.saturating_add(daily_step(sell_in)).min(MAX_QUALITY)
}

fn event_ticket(quality: i32, sell_in: i32) -> i32 {
    let increase = match sell_in {
        s if s >= 10 => 1,
        s if s >= 5 => 2,
        s if s >= 0 => 3,
        // The concert is over.
        _ => return MIN_QUALITY,
    };
    quality.saturating_add(increase).min(MAX_QUALITY)
}

fn accelerated_decay(quality: i32, sell_in: i32) -> i32 {
    // Clamped after each of the two steps.
    standard_decay(standard_decay(quality, sell_in), sell_in)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sell_in_decrements_except_for_legendary() {
        assert_eq!(STANDARD.next_sell_in(10), 9);
        assert_eq!(STANDARD.next_sell_in(0), -1);
        assert_eq!(RIPENING.next_sell_in(-4), -5);
        assert_eq!(EVENT_TICKET.next_sell_in(1), 0);
        assert_eq!(ACCELERATED.next_sell_in(3), 2);
        assert_eq!(LEGENDARY.next_sell_in(10), 10);
        assert_eq!(LEGENDARY.next_sell_in(-10), -10);
    }

    #[test]
    fn standard_decay_doubles_past_sell_by_and_floors_at_zero() {
        assert_eq!(STANDARD.next_quality(20, 9), 19);
        assert_eq!(STANDARD.next_quality(20, 0), 19);
        assert_eq!(STANDARD.next_quality(20, -1), 18);
        assert_eq!(STANDARD.next_quality(1, -1), 0);
        assert_eq!(STANDARD.next_quality(0, 5), 0);
    }

    #[test]
    fn standard_decay_does_not_correct_out_of_range_input() {
        assert_eq!(STANDARD.next_quality(80, 5), 79);
        assert_eq!(STANDARD.next_quality(-5, 5), 0);
    }

    #[test]
    fn legendary_quality_never_changes() {
        assert_eq!(LEGENDARY.next_quality(80, -100), 80);
        assert_eq!(LEGENDARY.next_quality(-3, 4), -3);
    }

    #[test]
    fn ripening_gains_quality_up_to_the_ceiling() {
        assert_eq!(RIPENING.next_quality(20, 9), 21);
        assert_eq!(RIPENING.next_quality(20, -1), 22);
        assert_eq!(RIPENING.next_quality(49, -1), 50);
        assert_eq!(RIPENING.next_quality(50, 3), 50);
    }

    #[test]
    fn event_ticket_tiers_use_inclusive_lower_bounds() {
        assert_eq!(EVENT_TICKET.next_quality(20, 14), 21);
        assert_eq!(EVENT_TICKET.next_quality(20, 10), 21);
        assert_eq!(EVENT_TICKET.next_quality(20, 9), 22);
        assert_eq!(EVENT_TICKET.next_quality(20, 5), 22);
        assert_eq!(EVENT_TICKET.next_quality(20, 4), 23);
        assert_eq!(EVENT_TICKET.next_quality(20, 0), 23);
        assert_eq!(EVENT_TICKET.next_quality(20, -1), 0);
        assert_eq!(EVENT_TICKET.next_quality(49, 2), 50);
    }

    #[test]
    fn event_ticket_drops_to_zero_regardless_of_prior_quality() {
        assert_eq!(EVENT_TICKET.next_quality(50, -1), 0);
        assert_eq!(EVENT_TICKET.next_quality(-8, -30), 0);
        assert_eq!(EVENT_TICKET.next_quality(200, -1), 0);
    }

    #[test]
    fn accelerated_decay_applies_standard_decay_twice() {
        assert_eq!(ACCELERATED.next_quality(10, 4), 8);
        assert_eq!(ACCELERATED.next_quality(10, -1), 6);
        assert_eq!(ACCELERATED.next_quality(3, -1), 0);
        assert_eq!(ACCELERATED.next_quality(1, 2), 0);
    }

    #[test]
    fn arithmetic_saturates_at_integer_limits() {
        assert_eq!(STANDARD.next_sell_in(i32::MIN), i32::MIN);
        assert_eq!(STANDARD.next_quality(i32::MIN, -1), 0);
        assert_eq!(RIPENING.next_quality(i32::MAX, -1), MAX_QUALITY);
        assert_eq!(EVENT_TICKET.next_quality(i32::MAX, 0), MAX_QUALITY);
    }
}

use std::time::Duration;

const MILLIS_PER_MINUTE: u128 = 60_000;

/// Speed and accuracy of the attempt so far. Both are truncated, not rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Characters per minute.
    pub speed: u32,
    /// Percentage of typed characters that match the target.
    pub accuracy: u32,
    pub correct: usize,
    pub total: usize,
}

impl Metrics {
    pub fn compute(correct: usize, total: usize, elapsed: Duration) -> Self {
        Self {
            speed: speed(total, elapsed),
            accuracy: accuracy(correct, total),
            correct,
            total,
        }
    }
}

/// `floor(total / minutes)`, or 0 before a full millisecond has passed.
pub fn speed(total: usize, elapsed: Duration) -> u32 {
    let millis = elapsed.as_millis();
    if millis == 0 {
        return 0;
    }
    let per_minute = total as u128 * MILLIS_PER_MINUTE / millis;
    u32::try_from(per_minute).unwrap_or(u32::MAX)
}

/// `floor(correct * 100 / total)`, or 0 when nothing was typed.
pub fn accuracy(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct * 100 / total) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_minute_hundred_chars() {
        let m = Metrics::compute(95, 100, Duration::from_secs(30));
        assert_eq!(m.speed, 200);
        assert_eq!(m.accuracy, 95);
    }

    #[test]
    fn test_accuracy_truncates() {
        assert_eq!(accuracy(8, 9), 88);
        assert_eq!(accuracy(2, 3), 66);
    }

    #[test]
    fn test_zero_total_zero_accuracy() {
        assert_eq!(accuracy(0, 0), 0);
    }

    #[test]
    fn test_zero_elapsed_zero_speed() {
        assert_eq!(speed(50, Duration::ZERO), 0);
        assert_eq!(speed(50, Duration::from_micros(900)), 0);
    }

    #[test]
    fn test_speed_truncates() {
        // 7 chars in 4 seconds = 105 per minute exactly; 7 in 4.001s falls just below
        assert_eq!(speed(7, Duration::from_millis(4000)), 105);
        assert_eq!(speed(7, Duration::from_millis(4001)), 104);
    }

    #[test]
    fn test_perfect_accuracy() {
        assert_eq!(accuracy(35, 35), 100);
    }
}

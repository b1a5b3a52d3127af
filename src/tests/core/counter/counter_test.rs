#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tracing_test::traced_test;

    use crate::core::counter::{Command, Counter};

    #[test]
    fn test_new() {
        let counter = Counter::new();
        assert_eq!(counter.current_value(), 0);
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_increment() {
        let mut counter = Counter::new();
        counter.increment();
        assert_eq!(counter.current_value(), 1);

        counter.increment();
        assert_eq!(counter.current_value(), 2);
    }

    #[test]
    fn test_decrement_below_zero() {
        let mut counter = Counter::new();
        counter.decrement();
        assert_eq!(counter.current_value(), -1);

        counter.decrement();
        assert_eq!(counter.current_value(), -2);
    }

    #[test]
    fn test_current_value_is_idempotent() {
        let mut counter = Counter::new();
        counter.increment();
        let first = counter.current_value();
        assert_eq!(counter.current_value(), first);
        assert_eq!(counter.current_value(), first);
    }

    #[test]
    #[traced_test]
    fn test_saturates_at_upper_bound() {
        let mut counter = Counter::at(i64::MAX);
        counter.increment();
        assert_eq!(counter.current_value(), i64::MAX);
        assert!(logs_contain("saturated at upper bound"));

        counter.decrement();
        assert_eq!(counter.current_value(), i64::MAX - 1);
    }

    #[test]
    #[traced_test]
    fn test_saturates_at_lower_bound() {
        let mut counter = Counter::at(i64::MIN);
        counter.decrement();
        assert_eq!(counter.current_value(), i64::MIN);
        assert!(logs_contain("saturated at lower bound"));
    }

    #[test]
    #[traced_test]
    fn test_increment_logs_new_value() {
        let mut counter = Counter::new();
        counter.increment();
        assert!(logs_contain("Counter incremented to: 1"));
    }

    #[test]
    fn test_replay_returns_final_value() {
        let mut counter = Counter::new();
        let value = counter.replay([
            Command::Increment,
            Command::Increment,
            Command::Decrement,
            Command::Increment,
        ]);
        assert_eq!(value, 2);
        assert_eq!(counter.current_value(), 2);
    }

    proptest! {
        #[test]
        fn n_increments_yield_n(n in 0usize..2_000) {
            let mut counter = Counter::new();
            for _ in 0..n {
                counter.increment();
            }
            prop_assert_eq!(counter.current_value(), n as i64);
        }

        #[test]
        fn any_interleaving_yields_difference(steps in prop::collection::vec(any::<bool>(), 0..500)) {
            let mut counter = Counter::new();
            let increments = steps.iter().filter(|up| **up).count() as i64;
            let decrements = steps.len() as i64 - increments;

            for up in steps {
                counter.apply(if up { Command::Increment } else { Command::Decrement });
            }

            prop_assert_eq!(counter.current_value(), increments - decrements);
        }
    }
}

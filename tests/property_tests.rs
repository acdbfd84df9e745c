//! Property-based tests for the calculation core and the history store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use levain::{
    classify_duration, classify_temperature, Calculation, DurationBand, HistoryStore, InputPair,
    MemorySlot, TemperatureBand,
};
use proptest::prelude::*;

/// Realistic kitchen ranges, away from zero.
fn positive_temperature() -> impl Strategy<Value = f64> {
    1.0f64..50.0
}

fn positive_hours() -> impl Strategy<Value = f64> {
    0.25f64..48.0
}

proptest! {
    #[test]
    fn dose_matches_formula(t in positive_temperature(), h in positive_hours()) {
        let expected = (16800.0 / (h * t) * 100.0).round() / 100.0;
        let outcome = InputPair::new(Some(t), Some(h)).compute();
        prop_assert_eq!(outcome, Calculation::Ready { yeast_grams: expected });
    }

    #[test]
    fn dose_is_always_finite(t in positive_temperature(), h in positive_hours()) {
        let dose = InputPair::new(Some(t), Some(h))
            .compute()
            .yeast_grams()
            .expect("non-zero inputs always produce a dose");
        prop_assert!(dose.is_finite());
    }

    #[test]
    fn dose_has_at_most_two_decimals(t in positive_temperature(), h in positive_hours()) {
        let dose = InputPair::new(Some(t), Some(h))
            .compute()
            .yeast_grams()
            .unwrap();
        let scaled = dose * 100.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn missing_input_never_computes(t in proptest::option::of(positive_temperature())) {
        let outcome = InputPair::new(t, None).compute();
        prop_assert_eq!(outcome, Calculation::Incomplete);
    }

    #[test]
    fn zero_product_never_computes(h in positive_hours()) {
        let outcome = InputPair::new(Some(0.0), Some(h)).compute();
        prop_assert!(matches!(outcome, Calculation::Degenerate(_)));
        prop_assert_eq!(outcome.yeast_grams(), None);
    }

    #[test]
    fn temperature_classification_matches_thresholds(t in -40.0f64..60.0) {
        let band = classify_temperature(t);
        let expected = if t < 20.0 {
            TemperatureBand::Cold
        } else if t <= 26.0 {
            TemperatureBand::Ideal
        } else if t <= 30.0 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        };
        prop_assert_eq!(band, expected);
    }

    #[test]
    fn duration_classification_matches_thresholds(h in 0.0f64..72.0) {
        let band = classify_duration(h);
        let expected = if h < 2.0 {
            DurationBand::Fast
        } else if h <= 4.0 {
            DurationBand::Normal
        } else if h <= 8.0 {
            DurationBand::Slow
        } else {
            DurationBand::VerySlow
        };
        prop_assert_eq!(band, expected);
    }

    #[test]
    fn classification_outlives_a_degenerate_dose(t in -40.0f64..60.0) {
        // Bands describe the raw inputs, so they stay defined even while
        // the formula yields no dose at all
        let inputs = InputPair::new(Some(t), Some(0.0));
        prop_assert_eq!(inputs.compute().yeast_grams(), None);

        let expected = if t < 20.0 {
            TemperatureBand::Cold
        } else if t <= 26.0 {
            TemperatureBand::Ideal
        } else if t <= 30.0 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        };
        prop_assert_eq!(classify_temperature(t), expected);
        prop_assert_eq!(classify_duration(0.0), DurationBand::Fast);
    }

    #[test]
    fn appends_keep_newest_first_order(
        doses in prop::collection::vec((positive_temperature(), positive_hours()), 1..10)
    ) {
        let mut history = HistoryStore::load(MemorySlot::new());

        for &(t, h) in &doses {
            let dose = InputPair::new(Some(t), Some(h))
                .compute()
                .yeast_grams()
                .unwrap();
            history.append(t, h, dose).unwrap();
        }

        prop_assert_eq!(history.len(), doses.len());
        for (i, &(t, h)) in doses.iter().rev().enumerate() {
            prop_assert_eq!(history.records()[i].temperature_c, t);
            prop_assert_eq!(history.records()[i].hours, h);
        }
    }

    #[test]
    fn log_survives_reload(
        doses in prop::collection::vec((positive_temperature(), positive_hours()), 0..8)
    ) {
        let mut history = HistoryStore::load(MemorySlot::new());
        for &(t, h) in &doses {
            history.append(t, h, 1.0).unwrap();
        }
        let records = history.records().to_vec();

        let reloaded = HistoryStore::load(history.into_slot());
        prop_assert_eq!(reloaded.records(), records.as_slice());
    }

    #[test]
    fn toggle_twice_restores_every_flag(index in 0usize..5) {
        let mut history = HistoryStore::load(MemorySlot::new());
        for _ in 0..5 {
            history.append(24.0, 4.0, 175.0).unwrap();
        }

        let before = history.records()[index].succeeded;
        history.toggle_succeeded(index).unwrap();
        prop_assert_ne!(history.records()[index].succeeded, before);
        history.toggle_succeeded(index).unwrap();
        prop_assert_eq!(history.records()[index].succeeded, before);
    }

    #[test]
    fn clear_always_leaves_an_empty_log(
        count in 0usize..8
    ) {
        let mut history = HistoryStore::load(MemorySlot::new());
        for _ in 0..count {
            history.append(24.0, 4.0, 175.0).unwrap();
        }

        history.clear().unwrap();
        prop_assert!(history.is_empty());
        prop_assert!(HistoryStore::load(history.into_slot()).is_empty());
    }
}

//! Lens optics helpers behind the interactive demos.
//!
//! Everything here is pure: the widgets own the state and call in for
//! the numbers they paint.

use std::fmt;

/// The five switchable layers of the premium coating stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoatingStack {
    pub anti_reflection: bool,
    pub hard_coat: bool,
    pub hydrophobic: bool,
    pub oleophobic: bool,
    pub anti_static: bool,
}

impl Default for CoatingStack {
    // Showroom default: everything on except the anti-static finish.
    fn default() -> Self {
        CoatingStack {
            anti_reflection: true,
            hard_coat: true,
            hydrophobic: true,
            oleophobic: true,
            anti_static: false,
        }
    }
}

impl CoatingStack {
    /// Display names in stack order, staff register. Customer mode rewrites
    /// these through the simplifier at render time.
    pub const LAYER_LABELS: [&'static str; 5] = [
        "Anti-Reflection",
        "Hard Coat",
        "Water-Repellent",
        "Smudge-Resistant",
        "Dust-Resistant",
    ];

    fn flags(&self) -> [bool; 5] {
        [
            self.anti_reflection,
            self.hard_coat,
            self.hydrophobic,
            self.oleophobic,
            self.anti_static,
        ]
    }

    pub fn enabled_count(&self) -> usize {
        self.flags().iter().filter(|&&on| on).count()
    }

    /// Labels of the enabled layers, in stack order.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        Self::LAYER_LABELS
            .iter()
            .zip(self.flags())
            .filter_map(|(&label, on)| on.then_some(label))
            .collect()
    }

    /// Label/flag pairs for rendering the toggle rows.
    pub fn layers_mut(&mut self) -> [(&'static str, &mut bool); 5] {
        [
            (Self::LAYER_LABELS[0], &mut self.anti_reflection),
            (Self::LAYER_LABELS[1], &mut self.hard_coat),
            (Self::LAYER_LABELS[2], &mut self.hydrophobic),
            (Self::LAYER_LABELS[3], &mut self.oleophobic),
            (Self::LAYER_LABELS[4], &mut self.anti_static),
        ]
    }

    /// Header under the stack preview ("4 layers enabled" for staff,
    /// "4 benefits selected" for customers).
    pub fn summary(&self, customer_mode: bool) -> String {
        let n = self.enabled_count();
        if customer_mode {
            format!("{n} benefits selected")
        } else {
            format!("{n} layers enabled")
        }
    }
}

/// Lens materials offered by the thickness estimator, by refractive index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, strum_macros::EnumIter)]
pub enum MaterialIndex {
    Index150,
    Index156,
    #[default]
    Index160,
    Index167,
    Index174,
}

impl MaterialIndex {
    pub fn value(self) -> f64 {
        match self {
            MaterialIndex::Index150 => 1.50,
            MaterialIndex::Index156 => 1.56,
            MaterialIndex::Index160 => 1.60,
            MaterialIndex::Index167 => 1.67,
            MaterialIndex::Index174 => 1.74,
        }
    }
}

impl fmt::Display for MaterialIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

/// Tint layer opacity for a UV level (0..=100).
///
/// Ramps from a faint indoor residue to a hard ceiling well short of
/// opaque, so the scene behind the lens stays visible at full sun.
pub fn tint_opacity(uv_level: u8) -> f32 {
    (0.1 + f32::from(uv_level) / 120.0).min(0.85)
}

/// Relative edge-thickness score for a prescription power (dioptres) and
/// material index. Dimensionless; only ever compared via `bar_percent`.
///
/// The denominator floor stops near-1.35 indices (nothing we sell) from
/// exploding the estimate.
pub fn thickness_score(power: f64, index: f64) -> f64 {
    (power.abs() * 10.0) / f64::max(1.2, (index - 1.35) * 10.0)
}

/// Bar fill (percent of full width) for a thickness score. Clamped so the
/// bar never vanishes and never reads as a measured absolute.
pub fn bar_percent(score: f64) -> f64 {
    ((score / 25.0) * 100.0).clamp(10.0, 95.0)
}

/// Parse the free-text power field. Anything that is not a finite number
/// reads as 0.0, mirroring how the estimator treats a cleared field.
pub fn parse_power(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn coating_defaults_enable_all_but_anti_static() {
        let stack = CoatingStack::default();
        assert!(stack.anti_reflection && stack.hard_coat && stack.hydrophobic && stack.oleophobic);
        assert!(!stack.anti_static);
        assert_eq!(stack.enabled_count(), 4);
    }

    #[test]
    fn enabled_labels_keep_stack_order() {
        let mut stack = CoatingStack::default();
        stack.hard_coat = false;
        assert_eq!(
            stack.enabled_labels(),
            vec!["Anti-Reflection", "Water-Repellent", "Smudge-Resistant"]
        );
    }

    #[test]
    fn toggling_one_layer_changes_only_that_layer_and_the_count() {
        for i in 0..CoatingStack::LAYER_LABELS.len() {
            let mut stack = CoatingStack::default();
            let before = stack.flags();

            for (j, (_, flag)) in stack.layers_mut().into_iter().enumerate() {
                if j == i {
                    *flag = !*flag;
                }
            }

            let after = stack.flags();
            for j in 0..before.len() {
                if j == i {
                    assert_ne!(after[j], before[j]);
                } else {
                    assert_eq!(after[j], before[j]);
                }
            }
            // Default is four on, one off; each flip moves the count by one.
            let expected = if before[i] { 3 } else { 5 };
            assert_eq!(stack.enabled_count(), expected);
        }
    }

    #[test]
    fn summary_switches_register_with_customer_mode() {
        let stack = CoatingStack::default();
        assert_eq!(stack.summary(false), "4 layers enabled");
        assert_eq!(stack.summary(true), "4 benefits selected");

        let mut none = CoatingStack::default();
        for (_, flag) in none.layers_mut() {
            *flag = false;
        }
        assert_eq!(none.summary(false), "0 layers enabled");
    }

    #[test]
    fn material_indices_are_ascending_and_default_to_160() {
        let values: Vec<f64> = MaterialIndex::iter().map(MaterialIndex::value).collect();
        assert_eq!(values, vec![1.50, 1.56, 1.60, 1.67, 1.74]);
        assert_eq!(MaterialIndex::default(), MaterialIndex::Index160);
        assert_eq!(MaterialIndex::Index174.to_string(), "1.74");
    }

    #[test]
    fn tint_opacity_ramps_then_caps() {
        assert!((tint_opacity(0) - 0.1).abs() < 1e-6);
        assert!((tint_opacity(20) - (0.1 + 20.0 / 120.0)).abs() < 1e-6);
        // The cap is reached exactly at level 90 and holds to 100.
        assert!((tint_opacity(90) - 0.85).abs() < 1e-6);
        assert!((tint_opacity(100) - 0.85).abs() < 1e-6);
    }

    #[test]
    fn reference_prescription_scores_forty_eight_percent() {
        // -3.00 dioptres in 1.60 material is the calibration point.
        let score = thickness_score(-3.00, 1.60);
        assert!(approx_eq(score, 12.0));
        assert!(approx_eq(bar_percent(score), 48.0));
    }

    #[test]
    fn zero_power_bottoms_out_at_the_bar_floor() {
        assert!(approx_eq(bar_percent(thickness_score(0.0, 1.60)), 10.0));
    }

    #[test]
    fn extreme_prescription_hits_the_bar_ceiling() {
        assert!(approx_eq(bar_percent(thickness_score(-10.0, 1.50)), 95.0));
    }

    #[test]
    fn higher_index_always_thins_the_same_power() {
        let thick = thickness_score(-4.0, 1.50);
        let thin = thickness_score(-4.0, 1.74);
        assert!(thin < thick);
    }

    #[test]
    fn denominator_floor_engages_for_low_indices() {
        // (1.45 - 1.35) * 10 = 1.0, below the 1.2 floor.
        assert!(approx_eq(thickness_score(-3.0, 1.45), 30.0 / 1.2));
    }

    #[test]
    fn power_sign_is_irrelevant() {
        assert!(approx_eq(thickness_score(5.0, 1.60), thickness_score(-5.0, 1.60)));
    }

    #[test]
    fn parse_power_falls_back_to_zero() {
        assert!(approx_eq(parse_power("-3.25"), -3.25));
        assert!(approx_eq(parse_power(" 2.5 "), 2.5));
        assert!(approx_eq(parse_power(""), 0.0));
        assert!(approx_eq(parse_power("abc"), 0.0));
        assert!(approx_eq(parse_power("NaN"), 0.0));
        assert!(approx_eq(parse_power("inf"), 0.0));
    }
}

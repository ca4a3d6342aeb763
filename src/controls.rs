//! Declarative control surface.
//!
//! Each demo names its inputs (range sliders, selects, toggles, action
//! buttons) and receives `(key, value)` change callbacks and `(key)` button
//! actions. Values are clamped to the declared range on the way in, so
//! steppers and renderers never see out-of-range parameters.

#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Number(f32),
    Flag(bool),
    Choice(String),
}

impl ControlValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            ControlValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ControlValue::Flag(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            ControlValue::Choice(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ControlConfig {
    Range {
        label: String,
        min: f32,
        max: f32,
        step: f32,
        unit: Option<String>,
        default: f32,
    },
    Select {
        label: String,
        options: Vec<(String, String)>,
        default: String,
    },
    Toggle {
        label: String,
        default: bool,
    },
    Button {
        label: String,
    },
}

impl ControlConfig {
    pub fn default_value(&self) -> Option<ControlValue> {
        match self {
            ControlConfig::Range { default, .. } => Some(ControlValue::Number(*default)),
            ControlConfig::Select { default, .. } => {
                Some(ControlValue::Choice(default.clone()))
            }
            ControlConfig::Toggle { default, .. } => Some(ControlValue::Flag(*default)),
            ControlConfig::Button { .. } => None,
        }
    }

    /// Force `value` into this control's domain, or None on a type mismatch.
    pub fn clamp(&self, value: ControlValue) -> Option<ControlValue> {
        match (self, value) {
            (ControlConfig::Range { min, max, .. }, ControlValue::Number(n)) => {
                Some(ControlValue::Number(n.clamp(*min, *max)))
            }
            (ControlConfig::Select { options, default, .. }, ControlValue::Choice(c)) => {
                let valid = options.iter().any(|(value, _)| *value == c);
                Some(ControlValue::Choice(if valid { c } else { default.clone() }))
            }
            (ControlConfig::Toggle { .. }, ControlValue::Flag(f)) => {
                Some(ControlValue::Flag(f))
            }
            _ => None,
        }
    }
}

/// Ordered set of named controls; declaration order is display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlSet {
    entries: Vec<(String, ControlConfig)>,
}

impl ControlSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(
        self,
        key: &str,
        label: &str,
        min: f32,
        max: f32,
        step: f32,
        default: f32,
    ) -> Self {
        self.range_with_unit(key, label, min, max, step, default, None)
    }

    pub fn range_with_unit(
        mut self,
        key: &str,
        label: &str,
        min: f32,
        max: f32,
        step: f32,
        default: f32,
        unit: Option<&str>,
    ) -> Self {
        self.entries.push((
            key.to_string(),
            ControlConfig::Range {
                label: label.to_string(),
                min,
                max,
                step,
                unit: unit.map(str::to_string),
                default,
            },
        ));
        self
    }

    pub fn select(mut self, key: &str, label: &str, options: &[(&str, &str)], default: &str) -> Self {
        self.entries.push((
            key.to_string(),
            ControlConfig::Select {
                label: label.to_string(),
                options: options
                    .iter()
                    .map(|(value, label)| (value.to_string(), label.to_string()))
                    .collect(),
                default: default.to_string(),
            },
        ));
        self
    }

    pub fn toggle(mut self, key: &str, label: &str, default: bool) -> Self {
        self.entries.push((
            key.to_string(),
            ControlConfig::Toggle {
                label: label.to_string(),
                default,
            },
        ));
        self
    }

    pub fn button(mut self, key: &str, label: &str) -> Self {
        self.entries.push((
            key.to_string(),
            ControlConfig::Button {
                label: label.to_string(),
            },
        ));
        self
    }

    pub fn config(&self, key: &str) -> Option<&ControlConfig> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, config)| config)
    }

    /// Clamp `value` against the named control, or None for unknown keys
    /// and type mismatches.
    pub fn clamp(&self, key: &str, value: ControlValue) -> Option<ControlValue> {
        self.config(key)?.clamp(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlConfig)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// Keys of all button controls, in declaration order.
    pub fn buttons(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(k, c)| match c {
            ControlConfig::Button { .. } => Some(k.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ControlSet {
        ControlSet::new()
            .range("gravity", "Gravity", 1.0, 25.0, 0.1, 9.81)
            .select(
                "lens_type",
                "Lens Type",
                &[("convex", "Convex"), ("concave", "Concave")],
                "convex",
            )
            .toggle("interference", "Interference Mode", false)
            .button("reset", "Reset Simulation")
    }

    #[test]
    fn test_range_clamps_to_bounds() {
        let controls = sample();
        assert_eq!(
            controls.clamp("gravity", ControlValue::Number(100.0)),
            Some(ControlValue::Number(25.0))
        );
        assert_eq!(
            controls.clamp("gravity", ControlValue::Number(-3.0)),
            Some(ControlValue::Number(1.0))
        );
        assert_eq!(
            controls.clamp("gravity", ControlValue::Number(9.81)),
            Some(ControlValue::Number(9.81))
        );
    }

    #[test]
    fn test_select_falls_back_to_default() {
        let controls = sample();
        assert_eq!(
            controls.clamp("lens_type", ControlValue::Choice("prism".into())),
            Some(ControlValue::Choice("convex".into()))
        );
        assert_eq!(
            controls.clamp("lens_type", ControlValue::Choice("concave".into())),
            Some(ControlValue::Choice("concave".into()))
        );
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let controls = sample();
        assert_eq!(controls.clamp("gravity", ControlValue::Flag(true)), None);
        assert_eq!(controls.clamp("missing", ControlValue::Number(1.0)), None);
    }

    #[test]
    fn test_buttons_listed_in_order() {
        let controls = sample();
        let buttons: Vec<&str> = controls.buttons().collect();
        assert_eq!(buttons, vec!["reset"]);
    }
}

/// A configurable value, with a name and the bounds of the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => {
                log::warn!("Value for {} out of bounds", self.name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_respected() {
        let mut option = ConfigOption {
            name: "decay",
            min: 0.0,
            max: 1.0,
            value: 0.5,
        };

        assert!(option.set(0.25));
        assert_eq!(option.value, 0.25);

        assert!(!option.set(1.5));
        assert_eq!(option.value, 0.25);
    }
}

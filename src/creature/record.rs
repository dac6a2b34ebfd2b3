//! Creature record.

use std::fmt;

/// A creature that can be stored in the engine and fight.
///
/// The `kind` is the creature's type name and doubles as its category.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub name: String,
    pub species: String,

    /// Height in metres
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    /// Base attack, before type effectiveness
    pub attack: i32,

    /// Type name (category)
    pub kind: String,
}

impl Creature {
    /// Create a creature
    ///
    /// # Example
    ///
    /// ```
    /// use battle_center::creature::Creature;
    ///
    /// let c = Creature::new("Pikachu", "Mouse", 0.4, 6.0, 55, "Electric");
    /// assert_eq!(c.kind, "Electric");
    /// ```
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        height: f64,
        weight: f64,
        attack: i32,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            height,
            weight,
            attack,
            kind: kind.into(),
        }
    }
}

/// ```text
/// Pikachu :
/// Mouse, Electric Type.
/// Height: 0.40 m    Weight: 6.00 kg    Attack: 55
/// ```
/// followed by a blank line.
impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} :", self.name)?;
        writeln!(f, "{}, {} Type.", self.species, self.kind)?;
        // At least two digits after the sign: 7 -> 07, -5 -> -05
        let sign = if self.attack < 0 { "-" } else { "" };
        writeln!(
            f,
            "Height: {:.2} m    Weight: {:.2} kg    Attack: {}{:02}",
            self.height,
            self.weight,
            sign,
            self.attack.unsigned_abs()
        )?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let c = Creature::new("Magikarp", "Fish", 0.9, 10.0, 7, "Water");

        assert_eq!(
            c.to_string(),
            "Magikarp :\nFish, Water Type.\nHeight: 0.90 m    Weight: 10.00 kg    Attack: 07\n\n"
        );
    }

    #[test]
    fn test_attack_pads_magnitude() {
        let attack_line = |attack: i32| {
            let shown = Creature::new("x", "y", 1.0, 1.0, attack, "Normal").to_string();
            shown.lines().nth(2).map(str::to_owned).unwrap()
        };

        assert!(attack_line(-5).ends_with("Attack: -05"));
        assert!(attack_line(-123).ends_with("Attack: -123"));
        assert!(attack_line(0).ends_with("Attack: 00"));
        assert!(attack_line(150).ends_with("Attack: 150"));
    }
}

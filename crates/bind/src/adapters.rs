use crate::lens::{ColorLens, ScalarLens};
use lightstage_common::{Color, ColorParseError};

/// Binds a color field to a `#rrggbb` string control.
pub struct ColorBinding<O> {
    lens: ColorLens<O>,
}

impl<O> ColorBinding<O> {
    pub const fn new(lens: ColorLens<O>) -> Self {
        Self { lens }
    }

    /// Current field value as a lowercase `#rrggbb` string.
    pub fn value(&self, owner: &O) -> String {
        self.lens.get(owner).hex_string()
    }

    /// Parse a hex string and write it to the owner field.
    pub fn set_value(&self, owner: &mut O, hex: &str) -> Result<(), ColorParseError> {
        self.lens.set(owner, Color::from_hex_str(hex)?);
        Ok(())
    }
}

/// Binds a radians-stored angle field to a degrees control.
///
/// The owner always stores radians; the presented value is always degrees.
pub struct DegreeBinding<O> {
    lens: ScalarLens<O>,
}

impl<O> DegreeBinding<O> {
    pub const fn new(lens: ScalarLens<O>) -> Self {
        Self { lens }
    }

    /// Current field value converted to degrees.
    pub fn value(&self, owner: &O) -> f32 {
        self.lens.get(owner).to_degrees()
    }

    /// Write a degrees value, stored as radians.
    pub fn set_value(&self, owner: &mut O, degrees: f32) {
        self.lens.set(owner, degrees.to_radians());
    }
}

/// Binds a float field to a control that supplies raw string input.
///
/// Writes parse to f32; unparsable input stores `f32::NAN` as a sentinel
/// rather than failing. Callers must treat NaN as a valid-but-degenerate
/// value, not an error.
pub struct ParsedScalarBinding<O> {
    lens: ScalarLens<O>,
}

impl<O> ParsedScalarBinding<O> {
    pub const fn new(lens: ScalarLens<O>) -> Self {
        Self { lens }
    }

    /// The stored raw value, as written.
    pub fn value(&self, owner: &O) -> f32 {
        self.lens.get(owner)
    }

    /// Parse the input and write it; NaN sentinel on parse failure.
    pub fn set_value(&self, owner: &mut O, input: &str) {
        let parsed = input.trim().parse::<f32>().unwrap_or(f32::NAN);
        self.lens.set(owner, parsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightstage_scene::{DirectionalLight, SpotLight};

    const LIGHT_COLOR: ColorLens<DirectionalLight> =
        ColorLens::new(|l| l.color, |l, c| l.color = c);
    const SPOT_ANGLE: ScalarLens<SpotLight> =
        ScalarLens::new(|l| l.angle, |l, v| l.angle = v);
    const MAP_SIZE: ScalarLens<DirectionalLight> =
        ScalarLens::new(|l| l.shadow_map_size, |l, v| l.shadow_map_size = v);

    #[test]
    fn color_binding_presents_hex() {
        let light = DirectionalLight::new(Color::new(1.0, 1.0, 1.0), 1.0);
        let binding = ColorBinding::new(LIGHT_COLOR);
        assert_eq!(binding.value(&light), "#ffffff");
    }

    #[test]
    fn color_binding_writes_parsed_color() {
        let mut light = DirectionalLight::new(Color::WHITE, 1.0);
        let binding = ColorBinding::new(LIGHT_COLOR);
        binding.set_value(&mut light, "#88aacc").unwrap();
        assert_eq!(binding.value(&light), "#88aacc");
    }

    #[test]
    fn color_binding_rejects_garbage() {
        let mut light = DirectionalLight::new(Color::WHITE, 1.0);
        let binding = ColorBinding::new(LIGHT_COLOR);
        assert!(binding.set_value(&mut light, "not-a-color").is_err());
        // Field untouched on rejected write
        assert_eq!(light.color, Color::WHITE);
    }

    #[test]
    fn degree_binding_round_trip() {
        let mut spot = SpotLight::new(Color::WHITE, 1.0);
        let binding = DegreeBinding::new(SPOT_ANGLE);
        for d in [-360.0_f32, -180.0, -33.3, 0.0, 0.5, 45.0, 359.9, 360.0] {
            binding.set_value(&mut spot, d);
            assert!(
                (binding.value(&spot) - d).abs() < 1e-3,
                "round trip failed for {d}"
            );
        }
    }

    #[test]
    fn degree_binding_stores_radians() {
        let mut spot = SpotLight::new(Color::WHITE, 1.0);
        let binding = DegreeBinding::new(SPOT_ANGLE);
        binding.set_value(&mut spot, 90.0);
        assert!((spot.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn parsed_binding_parses_numbers() {
        let mut light = DirectionalLight::new(Color::WHITE, 1.0);
        let binding = ParsedScalarBinding::new(MAP_SIZE);
        binding.set_value(&mut light, "3.5");
        assert_eq!(binding.value(&light), 3.5);
        binding.set_value(&mut light, " 1024 ");
        assert_eq!(binding.value(&light), 1024.0);
    }

    #[test]
    fn parsed_binding_degrades_to_nan() {
        let mut light = DirectionalLight::new(Color::WHITE, 1.0);
        let binding = ParsedScalarBinding::new(MAP_SIZE);
        binding.set_value(&mut light, "abc");
        assert!(binding.value(&light).is_nan());
    }
}

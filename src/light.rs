use glam::Vec3;

use crate::math::{lerp, AffineTransform, Order};

const NIGHT_COLOR: Vec3 = Vec3::new(0.1, 0.1, 0.2);
const MORNING_COLOR: Vec3 = Vec3::new(0.4, 0.5, 0.6);
const NOON_COLOR: Vec3 = Vec3::new(0.7, 0.7, 0.5);
const EVENING_COLOR: Vec3 = Vec3::new(0.6, 0.2, 0.0);

/// Quarter of a day/night cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayTime {
    fn next(self) -> Self {
        match self {
            Self::Morning => Self::Afternoon,
            Self::Afternoon => Self::Evening,
            Self::Evening => Self::Night,
            Self::Night => Self::Morning,
        }
    }

    /// Colors at the start and the end of this section
    fn colors(self) -> (Vec3, Vec3) {
        match self {
            Self::Morning => (MORNING_COLOR, NOON_COLOR),
            Self::Afternoon => (NOON_COLOR, EVENING_COLOR),
            Self::Evening => (EVENING_COLOR, NIGHT_COLOR),
            Self::Night => (NIGHT_COLOR, MORNING_COLOR),
        }
    }
}

/// Sun light drifting from a start to an end position while its color
/// cycles through night, morning, afternoon and evening.
#[derive(Debug, Clone)]
pub struct Light {
    transform: AffineTransform,
    day_time: DayTime,
    start_position: Vec3,
    /// Unit vector from start to end position
    direction: Vec3,
    distance: f32,
    cycle_duration: f32,
    /// Time spent in the current section
    section_time: f32,
    color: Vec3,
}

impl Light {
    /// Start a new cycle at midnight; `cycle_duration` is one full day in seconds
    pub fn new(start_position: Vec3, end_position: Vec3, cycle_duration: f32) -> Self {
        let offset = end_position - start_position;
        Self {
            transform: AffineTransform::from_translation(start_position),
            day_time: DayTime::Night,
            start_position,
            direction: offset.normalize_or_zero(),
            distance: offset.length(),
            cycle_duration,
            section_time: 0.0,
            color: NIGHT_COLOR,
        }
    }

    pub fn update(&mut self, time_delta: f32) {
        self.section_time += time_delta;

        let section_duration = self.cycle_duration * 0.25;
        let (from, to) = self.day_time.colors();
        self.color = lerp(from, to, self.section_time / section_duration);

        if self.section_time > section_duration {
            self.section_time = 0.0;
            self.day_time = self.day_time.next();
            if self.day_time == DayTime::Night {
                self.transform.set_location(self.start_position);
            }
            log::debug!("sun entered {:?}", self.day_time);
        }

        // start to end takes half a cycle
        let t = time_delta / (section_duration * 2.0);
        self.transform.translate(self.direction * (self.distance * t), Order::Right);
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn day_time(&self) -> DayTime {
        self.day_time
    }

    pub fn location(&self) -> Vec3 {
        self.transform.location()
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> Light {
        Light::new(Vec3::new(-20.0, 50.0, -40.0), Vec3::new(20.0, 30.0, -50.0), 60.0)
    }

    #[test]
    fn test_starts_at_night() {
        let light = sun();
        assert_eq!(light.day_time(), DayTime::Night);
        assert_eq!(light.color(), NIGHT_COLOR);
        assert_eq!(light.location(), Vec3::new(-20.0, 50.0, -40.0));
    }

    #[test]
    fn test_color_blends_within_section() {
        let mut light = sun();
        light.update(7.5); // half of a 15s section
        assert!(light.color().abs_diff_eq(lerp(NIGHT_COLOR, MORNING_COLOR, 0.5), 1e-6));
        assert_eq!(light.day_time(), DayTime::Night);
    }

    #[test]
    fn test_sections_advance_in_order() {
        let mut light = sun();
        let mut seen = vec![];
        for _ in 0..4 {
            light.update(16.0);
            seen.push(light.day_time());
        }
        assert_eq!(
            seen,
            vec![DayTime::Morning, DayTime::Afternoon, DayTime::Evening, DayTime::Night]
        );
    }

    #[test]
    fn test_moves_towards_end_position() {
        let mut light = sun();
        // half a cycle covers the whole start to end distance
        for _ in 0..30 {
            light.update(1.0);
        }
        assert!(light.location().abs_diff_eq(Vec3::new(20.0, 30.0, -50.0), 1e-3));
    }

    #[test]
    fn test_night_returns_to_start() {
        let mut light = sun();
        for _ in 0..3 {
            light.update(16.0);
        }
        assert_eq!(light.day_time(), DayTime::Evening);

        light.update(16.0);
        assert_eq!(light.day_time(), DayTime::Night);
        // reset happens before this frame's drift
        let drift = light.location() - Vec3::new(-20.0, 50.0, -40.0);
        assert!((drift.length() - light.distance * 16.0 / 30.0).abs() < 1e-3);
        assert!(light.transform().matrix().abs_diff_eq(
            light.transform().inverse_matrix().inverse(),
            1e-4
        ));
    }
}

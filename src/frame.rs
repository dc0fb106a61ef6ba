/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Fixed timestep frames for deterministic headless runs
#[derive(Debug, Clone)]
pub struct FixedFrames {
    delta: f32,
    remaining: u64,
    frame_number: u64,
}

impl FixedFrames {
    pub fn new(count: u64, delta: f32) -> Self {
        Self {
            delta,
            remaining: count,
            frame_number: 0,
        }
    }
}

impl Iterator for FixedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let time = self.frame_number as f32 * self.delta;
        let info = FrameInfo::new(self.frame_number, time, self.delta);
        self.frame_number += 1;
        Some(info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

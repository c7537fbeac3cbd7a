use crate::capture::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;

const FILL_LUMA: u8 = 128;

/// Frame source that fabricates flat gray RGB frames.
///
/// Stand-in for the out-of-scope camera: every call yields a fresh
/// frame with an incrementing capture sequence, so the scan loop and
/// demo binary run without real hardware.
pub struct SyntheticFrameSource {
    width: u32,
    height: u32,
    sequence: u64,
}

impl SyntheticFrameSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sequence: 0,
        }
    }
}

impl FrameSource for SyntheticFrameSource {
    fn current_frame(&mut self) -> Option<Frame> {
        let len = (self.width as usize) * (self.height as usize) * 3;
        let frame = Frame::new(
            vec![FILL_LUMA; len],
            self.width,
            self.height,
            3,
            self.sequence,
        );
        self.sequence += 1;
        Some(frame)
    }
}

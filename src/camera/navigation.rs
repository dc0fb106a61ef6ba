use serde::{Deserialize, Serialize};

/// How cameras are driven
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Keyboard and mouse move the camera
    #[default]
    FreeFly,
    /// The camera travels along its Bezier path, live input is ignored
    FollowPath,
}

impl NavigationMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::FreeFly => Self::FollowPath,
            Self::FollowPath => Self::FreeFly,
        }
    }
}

/// Navigation mode shared by every camera of a scene.
///
/// Cameras read it in `Camera::update`, so all of them switch modes in lockstep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneNavigationState {
    mode: NavigationMode,
}

impl SceneNavigationState {
    pub fn new(mode: NavigationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: NavigationMode) {
        self.mode = mode;
    }

    pub fn toggle_nav_mode(&mut self) {
        self.mode = self.mode.toggled();
    }
}

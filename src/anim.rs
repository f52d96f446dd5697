//! Named frame clips over the shared sprite sheet (9 columns x 10 rows).

/// A frame range on the sprite sheet with its playback rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub name: &'static str,
    pub from: u32,
    pub to: u32,
    pub fps: f32,
    pub looped: bool,
}

const fn still(name: &'static str, frame: u32) -> Clip {
    Clip {
        name,
        from: frame,
        to: frame,
        fps: 1.0,
        looped: false,
    }
}

pub const KIRB_IDLE: Clip = still("kirb_idle", 0);
pub const KIRB_INHALING: Clip = still("kirb_inhaling", 1);
pub const KIRB_FULL: Clip = still("kirb_full", 2);
pub const INHALE_EFFECT: Clip = Clip {
    name: "inhale_effect",
    from: 3,
    to: 8,
    fps: 15.0,
    looped: true,
};
pub const SHOOTING_STAR: Clip = still("shooting_star", 9);
pub const GUY_IDLE: Clip = still("guy_idle", 18);
pub const GUY_WALK: Clip = Clip {
    name: "guy_walk",
    from: 18,
    to: 19,
    fps: 4.0,
    looped: true,
};
pub const BIRD: Clip = Clip {
    name: "bird",
    from: 27,
    to: 28,
    fps: 4.0,
    looped: true,
};
pub const FLAME: Clip = Clip {
    name: "flame",
    from: 36,
    to: 37,
    fps: 4.0,
    looped: true,
};

#[derive(Debug, Clone)]
pub struct Animator {
    clip: Clip,
    frame: u32,
    elapsed: f32,
}

impl Animator {
    pub fn new(clip: Clip) -> Self {
        Self {
            clip,
            frame: clip.from,
            elapsed: 0.0,
        }
    }

    /// Switch clips. Re-playing the active clip is a no-op; a different clip
    /// restarts from its first frame.
    pub fn play(&mut self, clip: Clip) {
        if self.clip.name == clip.name {
            return;
        }
        self.clip = clip;
        self.frame = clip.from;
        self.elapsed = 0.0;
    }

    pub fn clip_name(&self) -> &'static str {
        self.clip.name
    }

    /// Current sheet frame index.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn update(&mut self, dt: f32) {
        if self.clip.to == self.clip.from {
            return;
        }
        self.elapsed += dt;
        let frame_time = 1.0 / self.clip.fps;
        while self.elapsed >= frame_time {
            self.elapsed -= frame_time;
            if self.frame < self.clip.to {
                self.frame += 1;
            } else if self.clip.looped {
                self.frame = self.clip.from;
            }
        }
    }
}

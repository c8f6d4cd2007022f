/// Index and autoplay bookkeeping for the hero slideshow.
#[derive(Clone, Debug, PartialEq)]
pub struct Slideshow {
    len: usize,
    current: usize,
    autoplay: bool,
}

/// The `active` marker moves from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Slideshow {
    /// `None` for an empty slideshow.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            autoplay: false,
        })
    }

    /// Jump to `index`, wrapping one step past either end.
    pub fn go_to(&mut self, index: isize) -> Transition {
        let from = self.current;
        let to = if index < 0 {
            self.len - 1
        } else if index as usize >= self.len {
            0
        } else {
            index as usize
        };
        self.current = to;
        Transition { from, to }
    }

    #[inline]
    pub fn next_slide(&mut self) -> Transition {
        self.go_to(self.current as isize + 1)
    }

    #[inline]
    pub fn prev_slide(&mut self) -> Transition {
        self.go_to(self.current as isize - 1)
    }

    /// Returns `true` when a timer must be started.
    pub fn start_autoplay(&mut self) -> bool {
        if self.autoplay {
            return false;
        }
        self.autoplay = true;
        true
    }

    /// Returns `true` when a running timer must be cleared.
    pub fn stop_autoplay(&mut self) -> bool {
        std::mem::replace(&mut self.autoplay, false)
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }
}

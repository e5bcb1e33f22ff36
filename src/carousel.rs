use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

pub const AUTOPLAY_INTERVAL_MS: u32 = 3_000;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logo {
    pub name: &'static str,
    pub url: &'static str,
}

pub const LOGOS: [Logo; 5] = [
    Logo {
        name: "TotalClinic",
        url: "https://cdn.jsdelivr.net/gh/freshlab-web/talkaio-lp-medico@main/dist/lovable-uploads/totalclinic.png",
    },
    Logo {
        name: "ProDental Brasil",
        url: "https://cdn.jsdelivr.net/gh/freshlab-web/talkaio-lp-medico@main/dist/lovable-uploads/prodentalbrasil.png",
    },
    Logo {
        name: "Dental Office",
        url: "https://cdn.jsdelivr.net/gh/freshlab-web/talkaio-lp-medico@main/dist/lovable-uploads/dentaloffice.png",
    },
    Logo {
        name: "SimplesDental",
        url: "https://cdn.jsdelivr.net/gh/freshlab-web/talkaio-lp-medico@main/dist/lovable-uploads/simplesdental.png",
    },
    Logo {
        name: "Clinicorp",
        url: "https://cdn.jsdelivr.net/gh/freshlab-web/talkaio-lp-medico@main/dist/lovable-uploads/clinicorp.png",
    },
];

/// Position of a looping carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Slide indices to draw, starting at the current one and wrapping.
    pub fn visible(&self, count: usize) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..count).map(|offset| (self.index + offset) % self.len).collect()
    }
}

pub enum CarouselAction {
    Next,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.advance(),
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideLayout {
    pub per_view: f64,
    pub spacing_px: u32,
}

impl SlideLayout {
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT_PX {
            Self { per_view: 1.5, spacing_px: 10 }
        } else {
            Self { per_view: 3.0, spacing_px: 20 }
        }
    }

    /// Slides that are at least partly on screen.
    pub fn rendered_slides(&self) -> usize {
        self.per_view.ceil() as usize
    }

    pub fn slide_width_percent(&self) -> f64 {
        100.0 / self.per_view
    }
}

/// Source of repeating timers. Dropping the returned handle stops the timer.
pub trait Scheduler {
    type Handle;

    fn every(&self, millis: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Interval;

    fn every(&self, millis: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis, move || tick())
    }
}

/// Running auto-advance timer, stopped when dropped.
pub struct Autoplay<H> {
    _timer: H,
}

impl<H> Autoplay<H> {
    pub fn start<S, F>(scheduler: &S, millis: u32, on_tick: F) -> Self
    where
        S: Scheduler<Handle = H>,
        F: FnMut() + 'static,
    {
        debug!("Carousel autoplay started ({}ms)", millis);
        Self {
            _timer: scheduler.every(millis, Box::new(on_tick)),
        }
    }
}

impl<H> Drop for Autoplay<H> {
    fn drop(&mut self) {
        debug!("Carousel autoplay stopped");
    }
}

//! [`ScrollCoordinator`] centering the list on the selected [`Room`].
//!
//! [`Room`]: crate::domain::Room

use tracing as log;

use crate::domain::room;

/// Layout geometry of a list card relative to its scroll container.
///
/// All values are in layout units, measured in the same coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Top edge of the scroll container.
    pub container_top: f64,

    /// Visible height of the scroll container.
    pub container_height: f64,

    /// Current scroll offset of the container.
    pub scroll_top: f64,

    /// Top edge of the card.
    pub card_top: f64,

    /// Height of the card.
    pub card_height: f64,
}

impl Geometry {
    /// Returns the scroll offset putting the card center onto the container
    /// center, never negative.
    #[must_use]
    pub fn centered_offset(&self) -> f64 {
        let offset = self.scroll_top + (self.card_top - self.container_top)
            - (self.container_height - self.card_height) / 2.0;
        offset.max(0.0)
    }

    /// Returns the distance between the card center and the container
    /// center.
    #[must_use]
    pub fn residual(&self) -> f64 {
        let card = self.card_top + self.card_height / 2.0;
        let container = self.container_top + self.container_height / 2.0;
        (card - container).abs()
    }
}

/// Scrollable list surface the [`ScrollCoordinator`] drives.
pub trait ScrollSurface {
    /// Measures the [`Geometry`] of the card of the provided [`room::Id`].
    ///
    /// [`None`] if the container or the card is not mounted.
    fn measure(&self, id: room::Id) -> Option<Geometry>;

    /// Scrolls the container to the provided offset.
    fn set_scroll_top(&mut self, offset: f64);
}

/// Outcome of a single [`ScrollCoordinator::tick()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tick {
    /// Nothing is being centered.
    Idle,

    /// Centering is still in progress.
    Continue(room::Id),

    /// Card is centered.
    Converged(room::Id),

    /// Card could not be centered within [`ScrollCoordinator::MAX_ATTEMPTS`].
    Exhausted(room::Id),
}

/// In-flight centering request.
#[derive(Clone, Copy, Debug)]
struct Pending {
    /// [`room::Id`] of the card to center.
    target: room::Id,

    /// Number of attempts made so far.
    attempts: u8,
}

/// Bounded retry loop centering the list on a target card, one attempt per
/// animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollCoordinator {
    /// Single pending slot: a new request preempts the in-flight one.
    pending: Option<Pending>,
}

impl ScrollCoordinator {
    /// Maximum number of attempts per centering request.
    pub const MAX_ATTEMPTS: u8 = 6;

    /// Residual distance considered centered.
    pub const TOLERANCE: f64 = 2.0;

    /// Returns the [`room::Id`] being centered, if any.
    #[must_use]
    pub fn target(&self) -> Option<room::Id> {
        self.pending.map(|p| p.target)
    }

    /// Starts centering the card of the provided [`room::Id`], preempting
    /// the in-flight request.
    pub fn request(&mut self, target: room::Id) {
        if let Some(prev) = self.pending.filter(|p| p.target != target) {
            log::debug!(
                "centering `Room(id: {})` preempted by `Room(id: {target})`",
                prev.target,
            );
        }
        self.pending = Some(Pending {
            target,
            attempts: 0,
        });
    }

    /// Cancels the in-flight request, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Makes a single centering attempt on the provided [`ScrollSurface`].
    ///
    /// An unmounted container or card makes the attempt a no-op, though it
    /// still counts against [`ScrollCoordinator::MAX_ATTEMPTS`].
    pub fn tick(&mut self, surface: &mut impl ScrollSurface) -> Tick {
        let Some(pending) = self.pending.as_mut() else {
            return Tick::Idle;
        };
        pending.attempts += 1;
        let Pending { target, attempts } = *pending;

        let residual = surface.measure(target).map(|geometry| {
            surface.set_scroll_top(geometry.centered_offset());
            surface
                .measure(target)
                .map_or(geometry.residual(), |g| g.residual())
        });

        if residual.is_some_and(|r| r <= Self::TOLERANCE) {
            self.pending = None;
            return Tick::Converged(target);
        }
        if attempts >= Self::MAX_ATTEMPTS {
            log::warn!(
                "failed to center `Room(id: {target})` in {attempts} attempts",
            );
            self.pending = None;
            return Tick::Exhausted(target);
        }
        Tick::Continue(target)
    }
}

#[cfg(test)]
pub(crate) mod spec {
    use std::collections::HashMap;

    use crate::domain::room;

    use super::{Geometry, ScrollCoordinator, ScrollSurface, Tick};

    /// In-memory list of equally tall cards.
    ///
    /// `damping` models smooth scrolling: only the `1 / damping` share of
    /// the requested distance is covered per scroll.
    #[derive(Debug)]
    pub(crate) struct List {
        pub(crate) cards: HashMap<room::Id, f64>,
        pub(crate) scroll_top: f64,
        pub(crate) damping: f64,
        pub(crate) scrolls: usize,
    }

    impl List {
        const CARD: f64 = 100.0;
        const HEIGHT: f64 = 400.0;
        const TOP: f64 = 50.0;

        pub(crate) fn new(ids: impl IntoIterator<Item = u64>) -> Self {
            Self {
                cards: ids
                    .into_iter()
                    .enumerate()
                    .map(|(n, id)| {
                        (room::Id::from(id), n as f64 * Self::CARD)
                    })
                    .collect(),
                scroll_top: 0.0,
                damping: 1.0,
                scrolls: 0,
            }
        }
    }

    impl ScrollSurface for List {
        fn measure(&self, id: room::Id) -> Option<Geometry> {
            let position = self.cards.get(&id)?;
            Some(Geometry {
                container_top: Self::TOP,
                container_height: Self::HEIGHT,
                scroll_top: self.scroll_top,
                card_top: Self::TOP + position - self.scroll_top,
                card_height: Self::CARD,
            })
        }

        fn set_scroll_top(&mut self, offset: f64) {
            self.scrolls += 1;
            self.scroll_top += (offset - self.scroll_top) / self.damping;
        }
    }

    fn id(n: u64) -> room::Id {
        room::Id::from(n)
    }

    fn drive(coordinator: &mut ScrollCoordinator, list: &mut List) -> Tick {
        loop {
            match coordinator.tick(list) {
                Tick::Continue(_) => continue,
                tick => return tick,
            }
        }
    }

    #[test]
    fn computes_centered_offset() {
        let geometry = Geometry {
            container_top: 50.0,
            container_height: 400.0,
            scroll_top: 0.0,
            card_top: 850.0,
            card_height: 100.0,
        };
        assert_eq!(geometry.centered_offset(), 650.0);
        assert_eq!(geometry.residual(), 650.0);

        let top = Geometry {
            card_top: 50.0,
            ..geometry
        };
        assert_eq!(top.centered_offset(), 0.0);
    }

    #[test]
    fn centers_in_one_attempt() {
        let mut list = List::new(1..=20);
        let mut coordinator = ScrollCoordinator::default();

        coordinator.request(id(9));

        assert_eq!(coordinator.tick(&mut list), Tick::Converged(id(9)));
        assert_eq!(list.scroll_top, 650.0);
        assert_eq!(coordinator.tick(&mut list), Tick::Idle);
    }

    #[test]
    fn retries_smooth_scrolling() {
        let mut list = List::new(1..=20);
        list.damping = 1.25;
        let mut coordinator = ScrollCoordinator::default();

        coordinator.request(id(9));

        assert_eq!(
            drive(&mut coordinator, &mut list),
            Tick::Converged(id(9)),
        );
        assert!(list.scrolls <= usize::from(ScrollCoordinator::MAX_ATTEMPTS));
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut list = List::new(1..=20);
        list.damping = 10.0;
        let mut coordinator = ScrollCoordinator::default();

        coordinator.request(id(20));

        assert_eq!(
            drive(&mut coordinator, &mut list),
            Tick::Exhausted(id(20)),
        );
        assert_eq!(list.scrolls, 6);
        assert_eq!(coordinator.target(), None);
    }

    #[test]
    fn counts_unmounted_cards_as_attempts() {
        let mut list = List::new(1..=3);
        let mut coordinator = ScrollCoordinator::default();

        coordinator.request(id(42));

        for _ in 1..ScrollCoordinator::MAX_ATTEMPTS {
            assert_eq!(coordinator.tick(&mut list), Tick::Continue(id(42)));
        }
        assert_eq!(coordinator.tick(&mut list), Tick::Exhausted(id(42)));
        assert_eq!(list.scrolls, 0);
    }

    #[test]
    fn preempts_pending_target() {
        let mut list = List::new(1..=20);
        list.damping = 10.0;
        let mut coordinator = ScrollCoordinator::default();

        coordinator.request(id(20));
        assert_eq!(coordinator.tick(&mut list), Tick::Continue(id(20)));

        list.damping = 1.0;
        coordinator.request(id(5));
        assert_eq!(coordinator.target(), Some(id(5)));
        assert_eq!(coordinator.tick(&mut list), Tick::Converged(id(5)));
    }
}

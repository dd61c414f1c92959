//! [`Room`] filtering predicate.

use rust_decimal::Decimal;

use crate::domain::Room;

use super::{FloorConstraint, Lease, Selection};

impl Selection {
    /// Indicates whether the provided [`Room`] satisfies every constraint of
    /// this [`Selection`].
    ///
    /// Pure and order-independent, so may be used as an iterator filter
    /// directly.
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        self.matches_type(room)
            && self.matches_lease(room)
            && self.matches_price(room)
            && self.matches_size(room)
            && self.matches_floor(room)
    }

    fn matches_type(&self, room: &Room) -> bool {
        self.room_type
            .as_ref()
            .is_none_or(|t| room.room_type.as_ref() == Some(t))
    }

    fn matches_lease(&self, room: &Room) -> bool {
        match self.lease {
            None => true,
            Some(Lease::Monthly) => {
                room.monthly_fee.is_some_and(|fee| fee.is_positive())
            }
            Some(Lease::Jeonse) => {
                room.monthly_fee.is_none_or(|fee| fee.is_zero())
            }
        }
    }

    fn matches_price(&self, room: &Room) -> bool {
        self.max_price.is_none_or(|limit| {
            room.monthly_fee.is_some_and(|fee| fee.in_man_won() <= limit)
        })
    }

    fn matches_size(&self, room: &Room) -> bool {
        self.size.is_none_or(|base| {
            let base = Decimal::from(base);
            room.real_area.is_some_and(|area| {
                let pyeong = area.in_pyeong();
                base <= pyeong && pyeong < base + Decimal::ONE
            })
        })
    }

    fn matches_floor(&self, room: &Room) -> bool {
        match self.floor() {
            None => true,
            Some(FloorConstraint::SemiBasement) => room.is_semi_basement(),
            Some(FloorConstraint::Exact(n)) => room.front_floor() == Some(n),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{Area, Money};
    use rust_decimal::Decimal;

    use crate::{
        domain::{
            room::{
                spec::{room, room_with_fee},
                Floor, Type,
            },
            Room,
        },
        filter::{FloorConstraint, Lease, Selection},
    };

    fn ids<'r>(
        selection: &Selection,
        rooms: impl IntoIterator<Item = &'r Room>,
    ) -> Vec<u64> {
        rooms
            .into_iter()
            .filter(|r| selection.matches(r))
            .map(|r| u64::from(r.id))
            .collect()
    }

    fn sized(id: u64, pyeong: u32) -> Room {
        Room {
            real_area: Area::square_meters(
                Decimal::from(pyeong) * Area::SQUARE_METERS_PER_PYEONG,
            ),
            ..room(id)
        }
    }

    fn floored(id: u64, floor: &str) -> Room {
        Room {
            floor: Floor::new(floor),
            ..room(id)
        }
    }

    #[test]
    fn empty_selection_passes_everything() {
        let rooms = [room(1), room_with_fee(2, 500_000), floored(3, "B1")];

        assert_eq!(ids(&Selection::default(), &rooms), [1, 2, 3]);
    }

    #[test]
    fn matches_exact_type() {
        let one_room = Room {
            room_type: Type::new("원룸"),
            ..room(1)
        };
        let two_room = Room {
            room_type: Type::new("투룸"),
            ..room(2)
        };
        let mut selection = Selection::default();
        selection.room_type = Type::new("원룸");

        assert_eq!(ids(&selection, [&one_room, &two_room, &room(3)]), [1]);
    }

    #[test]
    fn splits_leases_by_monthly_fee() {
        let rooms = [room_with_fee(1, 0), room_with_fee(2, 500_000), room(3)];

        let mut selection = Selection::default();

        selection.lease = Some(Lease::Jeonse);
        assert_eq!(ids(&selection, &rooms), [1, 3]);

        selection.lease = Some(Lease::Monthly);
        assert_eq!(ids(&selection, &rooms), [2]);
    }

    #[test]
    fn limits_price_in_man_won() {
        let rooms = [
            room_with_fee(1, 500_000),
            room_with_fee(2, 600_000),
            room_with_fee(3, 45),
            room(4),
        ];
        let mut selection = Selection::default();
        selection.max_price = Some(Decimal::from(50));

        assert_eq!(ids(&selection, &rooms), [1, 3]);
    }

    #[test]
    fn buckets_size_by_pyeong() {
        let almost_six = Room {
            real_area: Area::square_meters(
                Decimal::from(6) * Area::SQUARE_METERS_PER_PYEONG
                    - Decimal::new(1, 3),
            ),
            ..room(3)
        };
        let rooms = [sized(1, 5), sized(2, 6), almost_six, room(4)];
        let mut selection = Selection::default();
        selection.size = Some(5);

        assert_eq!(ids(&selection, &rooms), [1, 3]);
    }

    #[test]
    fn matches_exact_front_floor() {
        let rooms = [
            floored(1, "3/15"),
            floored(2, "반지하"),
            floored(3, "13"),
            room(4),
        ];
        let mut selection = Selection::default();
        selection.set_floor_num(Some(3));

        assert_eq!(ids(&selection, &rooms), [1]);

        selection.set_floor_num(Some(-1));
        assert_eq!(ids(&selection, &rooms), [2]);
    }

    #[test]
    fn matches_semi_basement() {
        let rooms = [
            floored(1, "B1"),
            floored(2, "0"),
            Room {
                room_type: Type::new("반지층 원룸"),
                ..floored(3, "1")
            },
            floored(4, "2/5"),
            room(5),
        ];
        let mut selection = Selection::default();
        selection.set_floor_label("반지하");

        assert_eq!(ids(&selection, &rooms), [1, 2, 3]);
    }

    #[test]
    fn combines_constraints() {
        let cheap_jeonse = Room {
            room_type: Type::new("원룸"),
            monthly_fee: Some(Money::ZERO),
            ..floored(1, "3")
        };
        let pricey = Room {
            room_type: Type::new("원룸"),
            ..room_with_fee(2, 900_000)
        };
        let mut selection = Selection::default();
        selection.room_type = Type::new("원룸");
        selection.lease = Some(Lease::Monthly);

        assert_eq!(ids(&selection, [&cheap_jeonse, &pricey]), [2]);

        selection.lease = Some(Lease::Jeonse);
        selection.set_floor(Some(FloorConstraint::Exact(3)));
        assert_eq!(ids(&selection, [&cheap_jeonse, &pricey]), [1]);
    }
}

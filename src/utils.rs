use std::ops::Add;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Pos {
    /// The 8 surrounding positions, in no particular order.
    pub fn neighbours(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|x| (-1..=1).map(move |y| pos!(x, y)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(move |offset| self + offset)
    }
}

#[test]
fn test_neighbours() {
    let neighbours: Vec<_> = pos!(3, -2).neighbours().collect();
    assert_eq!(neighbours.len(), 8);
    let distinct: std::collections::HashSet<_> = neighbours.iter().collect();
    assert_eq!(distinct.len(), 8);
    for neighbour in neighbours {
        assert_ne!(neighbour, pos!(3, -2));
        assert!((neighbour.x - 3).abs() <= 1);
        assert!((neighbour.y + 2).abs() <= 1);
    }
}

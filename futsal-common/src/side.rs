use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    #[derivative(Default)]
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// One value per side of the scoreboard.
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideBundle<T> {
    pub left: T,
    pub right: T,
}

impl<T> SideBundle<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        [(Side::Left, &mut self.left), (Side::Right, &mut self.right)].into_iter()
    }
}

impl<T> Index<Side> for SideBundle<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl<T> IndexMut<Side> for SideBundle<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T: Display> Display for SideBundle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Left: {}, Right: {}", self.left, self.right)
    }
}

pub struct SideBundleIterator<'a, T> {
    bundle: &'a SideBundle<T>,
    index: usize,
}

impl<'a, T> Iterator for SideBundleIterator<'a, T> {
    type Item = (Side, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.index {
            0 => (Side::Left, &self.bundle.left),
            1 => (Side::Right, &self.bundle.right),
            _ => return None,
        };

        self.index += 1;
        Some(value)
    }
}

impl<'a, T> IntoIterator for &'a SideBundle<T> {
    type Item = (Side, &'a T);
    type IntoIter = SideBundleIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SideBundleIterator {
            bundle: self,
            index: 0,
        }
    }
}

impl<T> IntoIterator for SideBundle<T> {
    type Item = (Side, T);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        vec![(Side::Left, self.left), (Side::Right, self.right)].into_iter()
    }
}

impl<T: Default> FromIterator<(Side, T)> for SideBundle<T> {
    fn from_iter<I: IntoIterator<Item = (Side, T)>>(iter: I) -> Self {
        let mut bundle = SideBundle::default();
        for (side, value) in iter {
            match side {
                Side::Left => bundle.left = value,
                Side::Right => bundle.right = value,
            }
        }
        bundle
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(Side::Right.other(), Side::Left);
    }

    #[test]
    fn test_bundle_indexing() {
        let mut bundle = SideBundle { left: 3, right: 7 };
        assert_eq!(bundle[Side::Left], 3);
        assert_eq!(bundle[Side::Right], 7);

        bundle[Side::Right] += 1;
        assert_eq!(bundle[Side::Right], 8);
    }

    #[test]
    fn test_bundle_iteration() {
        let bundle = SideBundle {
            left: "a",
            right: "b",
        };
        let collected: Vec<_> = bundle.iter().collect();
        assert_eq!(collected, vec![(Side::Left, &"a"), (Side::Right, &"b")]);

        let rebuilt: SideBundle<&str> = bundle.into_iter().collect();
        assert_eq!(rebuilt, bundle);
    }
}

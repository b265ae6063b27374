//! Coordinate system and axis interfaces, declared once for both hierarchies.

/// Declares the coordinate system and axis interfaces in the invoking module.
///
/// Sibling items (`IdentifiedObject` and the other families) are named
/// through `super`, so the same declarations bind to each hierarchy's own
/// traits.
macro_rules! cs_interfaces {
    () => {
        use std::sync::Arc;

        use super::IdentifiedObject;

        crate::code_list! {
            /// Direction of positive increments along an axis.
            pub enum AxisDirection {
                North = "north",
                NorthEast = "northEast",
                East = "east",
                SouthEast = "southEast",
                South = "south",
                SouthWest = "southWest",
                West = "west",
                NorthWest = "northWest",
                Up = "up",
                Down = "down",
                GeocentricX = "geocentricX",
                GeocentricY = "geocentricY",
                GeocentricZ = "geocentricZ",
                Future = "future",
                Past = "past",
                ColumnPositive = "columnPositive",
                ColumnNegative = "columnNegative",
                RowPositive = "rowPositive",
                RowNegative = "rowNegative",
                DisplayRight = "displayRight",
                DisplayLeft = "displayLeft",
                DisplayUp = "displayUp",
                DisplayDown = "displayDown",
            }
        }

        crate::code_list! {
            /// Meaning of an axis value range.
            pub enum RangeMeaning {
                Exact = "exact",
                Wraparound = "wraparound",
            }
        }

        /// One axis of a coordinate system.
        pub trait CoordinateSystemAxis: IdentifiedObject {
            fn abbreviation(&self) -> String;
            fn direction(&self) -> AxisDirection;
            /// Unit symbol (e.g. `"deg"`, `"m"`).
            fn unit(&self) -> String;
            fn minimum_value(&self) -> f64;
            fn maximum_value(&self) -> f64;
            fn range_meaning(&self) -> Option<RangeMeaning>;
        }

        /// Sequence of axes.
        pub trait CoordinateSystem: IdentifiedObject {
            fn dimension(&self) -> usize;

            /// The axis at `index`, or `None` past the last dimension.
            fn axis(&self, index: usize) -> Option<Arc<dyn CoordinateSystemAxis>>;

            fn as_affine(self: Arc<Self>) -> Option<Arc<dyn AffineCs>> {
                None
            }

            fn as_cartesian(self: Arc<Self>) -> Option<Arc<dyn CartesianCs>> {
                None
            }

            fn as_ellipsoidal(self: Arc<Self>) -> Option<Arc<dyn EllipsoidalCs>> {
                None
            }

            fn as_spherical(self: Arc<Self>) -> Option<Arc<dyn SphericalCs>> {
                None
            }

            fn as_cylindrical(self: Arc<Self>) -> Option<Arc<dyn CylindricalCs>> {
                None
            }

            fn as_polar(self: Arc<Self>) -> Option<Arc<dyn PolarCs>> {
                None
            }

            fn as_vertical(self: Arc<Self>) -> Option<Arc<dyn VerticalCs>> {
                None
            }

            fn as_linear(self: Arc<Self>) -> Option<Arc<dyn LinearCs>> {
                None
            }

            fn as_time(self: Arc<Self>) -> Option<Arc<dyn TimeCs>> {
                None
            }

            fn as_user_defined(self: Arc<Self>) -> Option<Arc<dyn UserDefinedCs>> {
                None
            }
        }

        pub trait AffineCs: CoordinateSystem {}

        /// Affine coordinate system with orthogonal axes.
        pub trait CartesianCs: AffineCs {}

        pub trait EllipsoidalCs: CoordinateSystem {}

        pub trait SphericalCs: CoordinateSystem {}

        pub trait CylindricalCs: CoordinateSystem {}

        pub trait PolarCs: CoordinateSystem {}

        pub trait VerticalCs: CoordinateSystem {}

        pub trait LinearCs: CoordinateSystem {}

        pub trait TimeCs: CoordinateSystem {}

        pub trait UserDefinedCs: CoordinateSystem {}
    };
}

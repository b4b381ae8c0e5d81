/// A 2D axis-aligned bounding box represented by minimum and maximum points.
///
/// This is the value type the IoU matrix engine operates on: immutable once
/// constructed, with geometric properties computed on demand. Coordinates are
/// `f64` so batch results can be compared against the per-pair reference to
/// tight tolerances.
///
/// Well-formed boxes satisfy `min.x <= max.x` and `min.y <= max.y`; zero-area
/// (degenerate) boxes are valid. Construction does not validate this — a box
/// with inverted coordinates is a caller error and yields unspecified (but
/// numeric, non-panicking) results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box2d {
    /// The minimum point of the bounding box (bottom-left corner).
    pub min: glam::DVec2,
    /// The maximum point of the bounding box (top-right corner).
    pub max: glam::DVec2,
}

impl Box2d {
    /// Creates a new bounding box from minimum and maximum points.
    ///
    /// # Arguments
    /// * `min` - The minimum point (bottom-left corner)
    /// * `max` - The maximum point (top-right corner)
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let bbox = Box2d::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 5.0));
    /// ```
    pub fn new(min: glam::DVec2, max: glam::DVec2) -> Self {
        Self { min, max }
    }

    /// Creates a new bounding box from four corner coordinates.
    ///
    /// This is the constructor callers with plain numeric box records use
    /// (detection outputs, dataframe columns, and similar sources that carry
    /// `xmin, ymin, xmax, ymax` tuples).
    ///
    /// # Example
    /// ```
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let bbox = Box2d::from_coords(0.0, 0.0, 2.0, 2.0);
    /// assert_eq!(bbox.area(), 4.0);
    /// ```
    pub fn from_coords(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            min: glam::DVec2::new(xmin, ymin),
            max: glam::DVec2::new(xmax, ymax),
        }
    }

    /// Creates a new bounding box from a center point and size vector.
    ///
    /// This constructor is commonly used with detector-style outputs where
    /// bounding boxes are represented as (center_x, center_y, width, height).
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let bbox = Box2d::from_center_size(DVec2::new(100.0, 200.0), DVec2::new(50.0, 80.0));
    /// // Results in a box from (75, 160) to (125, 240)
    /// assert_eq!(bbox.min, DVec2::new(75.0, 160.0));
    /// ```
    pub fn from_center_size(center: glam::DVec2, size: glam::DVec2) -> Self {
        let half_size = size / 2.0;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Calculates the area of the bounding box.
    ///
    /// Negative extents clamp to zero, so an inverted box yields 0.0 rather
    /// than a negative area that would corrupt downstream IoU values. For a
    /// well-formed box the clamp is a no-op.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let bbox = Box2d::new(DVec2::ZERO, DVec2::new(4.0, 3.0));
    /// assert_eq!(bbox.area(), 12.0);
    /// ```
    pub fn area(&self) -> f64 {
        let size = (self.max - self.min).max(glam::DVec2::ZERO);

        size.x * size.y
    }

    /// Calculates the center point of the bounding box.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let bbox = Box2d::new(DVec2::new(0.0, 0.0), DVec2::new(4.0, 2.0));
    /// assert_eq!(bbox.center(), DVec2::new(2.0, 1.0));
    /// ```
    pub fn center(&self) -> glam::DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Calculates the area of intersection between this bounding box and another.
    ///
    /// The overlap rectangle is the max of the minimum points and the min of
    /// the maximum points. When the boxes do not overlap on an axis that
    /// extent goes negative and is floored to zero before multiplying —
    /// without the per-axis floor, two fully disjoint boxes would multiply
    /// two negative extents into a spurious positive area.
    ///
    /// # Arguments
    /// * `other` - The other bounding box to intersect with
    ///
    /// # Returns
    /// The intersection area, or 0.0 if the boxes do not overlap
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let a = Box2d::new(DVec2::new(0.0, 0.0), DVec2::new(4.0, 4.0));
    /// let b = Box2d::new(DVec2::new(2.0, 2.0), DVec2::new(6.0, 6.0));
    /// assert_eq!(a.intersection(&b), 4.0); // 2x2 overlap
    /// ```
    pub fn intersection(&self, other: &Self) -> f64 {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        let size = (max - min).max(glam::DVec2::ZERO);

        size.x * size.y
    }

    /// Calculates the Intersection over Union (IoU) between this bounding box and another.
    ///
    /// IoU is the standard overlap metric in object-detection evaluation:
    /// intersection area divided by union area, where
    /// `union = area_a + area_b - intersection`.
    ///
    /// # Returns
    /// A value between 0.0 and 1.0:
    /// - 0.0: no overlap (also returned for two zero-area boxes, where the
    ///   naive formula would be 0/0)
    /// - 1.0: identical boxes with positive area
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let a = Box2d::new(DVec2::new(0.0, 0.0), DVec2::new(2.0, 2.0));
    /// let b = Box2d::new(DVec2::new(1.0, 1.0), DVec2::new(3.0, 3.0));
    /// // intersection 1, union 4 + 4 - 1 = 7
    /// assert!((a.iou(&b) - 1.0 / 7.0).abs() < 1e-12);
    /// ```
    pub fn iou(&self, other: &Self) -> f64 {
        let intersection_area = self.intersection(other);
        let union_area = self.area() + other.area() - intersection_area;

        if union_area > 0.0 {
            intersection_area / union_area
        } else {
            0.0
        }
    }

    /// Creates a union bounding box that encompasses both this bounding box and another.
    ///
    /// The result is the smallest axis-aligned rectangle containing both
    /// inputs, useful for merging overlapping detections.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let a = Box2d::new(DVec2::new(0.0, 0.0), DVec2::new(5.0, 5.0));
    /// let b = Box2d::new(DVec2::new(3.0, 3.0), DVec2::new(8.0, 8.0));
    /// let union = a.union(&b);
    /// assert_eq!(union.max, DVec2::new(8.0, 8.0));
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Checks if this bounding box completely contains another bounding box.
    ///
    /// Boundary contact counts as containment.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let outer = Box2d::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
    /// let inner = Box2d::new(DVec2::new(2.0, 3.0), DVec2::new(7.0, 8.0));
    /// assert!(outer.contains(&inner));
    /// assert!(!inner.contains(&outer));
    /// ```
    pub fn contains(&self, other: &Self) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    /// Calculates the overlap ratio using the smaller area as denominator.
    ///
    /// Unlike IoU, which divides by the union area, this divides the
    /// intersection by the smaller of the two areas, making it sensitive to
    /// a small box contained within a much larger one.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use ioumat_core::geometry::bbox::Box2d;
    /// let large = Box2d::new(DVec2::new(0.0, 0.0), DVec2::new(100.0, 100.0));
    /// let small = Box2d::new(DVec2::new(10.0, 10.0), DVec2::new(30.0, 30.0));
    /// assert_eq!(large.overlap_ratio(&small), 1.0); // fully contained
    /// assert!(large.overlap_ratio(&small) > large.iou(&small));
    /// ```
    pub fn overlap_ratio(&self, other: &Self) -> f64 {
        let intersection_area = self.intersection(other);
        let min_area = self.area().min(other.area());

        if min_area > 0.0 {
            intersection_area / min_area
        } else {
            0.0
        }
    }
}

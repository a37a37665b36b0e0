use clip_path_geom::{
    core::{math::Rect, traits::FuzzyEq},
    path::{internal::path_boolean::sampled_signed_area, Path},
};

/// Fuzzy compare rects.
pub fn rect_fuzzy_eq_eps(a: &Rect, b: &Rect, eps: f64) -> bool {
    a.min.fuzzy_eq_eps(b.min, eps) && a.max.fuzzy_eq_eps(b.max, eps)
}

/// Holds a set of properties of a path for comparison in tests.
#[derive(Debug, Copy, Clone)]
pub struct PathProperties {
    pub node_count: usize,
    /// Absolute enclosed area (direction independent).
    pub area: f64,
    pub extents: Rect,
}

impl PathProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        node_count: usize,
        area: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            node_count,
            area,
            extents: Rect::new(
                clip_path_geom::core::math::vec2(min_x, min_y),
                clip_path_geom::core::math::vec2(max_x, max_y),
            ),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self {
            node_count: path.len(),
            area: sampled_signed_area(&path.curves()).abs(),
            extents: path.bounding_box(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.fuzzy_eq_tol(other, PropertyTolerance::uniform(eps))
    }

    pub fn fuzzy_eq_tol(&self, other: &Self, tol: PropertyTolerance) -> bool {
        self.node_count == other.node_count
            && self.area.fuzzy_eq_eps(other.area, tol.area)
            && rect_fuzzy_eq_eps(&self.extents, &other.extents, tol.extents)
    }
}

/// Separate area and extents epsilons for comparing property sets.
///
/// Results cut from curved input only match expected values loosely: intersect points are
/// approximate (within the flatness threshold) and the area is sampled per curve.
#[derive(Debug, Copy, Clone)]
pub struct PropertyTolerance {
    pub area: f64,
    pub extents: f64,
}

impl PropertyTolerance {
    pub const fn uniform(eps: f64) -> Self {
        Self {
            area: eps,
            extents: eps,
        }
    }
}

impl Default for PropertyTolerance {
    fn default() -> Self {
        Self::uniform(PathProperties::PROP_CMP_EPS)
    }
}

pub fn create_property_set<'a, I>(paths: I) -> Vec<PathProperties>
where
    I: IntoIterator<Item = &'a Path>,
{
    paths.into_iter().map(PathProperties::from_path).collect()
}

pub fn property_sets_match(result_set: &[PathProperties], expected_set: &[PathProperties]) -> bool {
    property_sets_match_tol(result_set, expected_set, PropertyTolerance::default())
}

pub fn property_sets_match_tol(
    result_set: &[PathProperties],
    expected_set: &[PathProperties],
    tol: PropertyTolerance,
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // simple N^2 comparisons, sets are always small
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected.fuzzy_eq_tol(properties_result, tol)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

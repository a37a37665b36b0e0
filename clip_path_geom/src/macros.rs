/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing path macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct an open path of corner nodes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::path_open;
/// # use clip_path_geom::path::*;
/// # use clip_path_geom::core::math::*;
/// let path: Path = path_open![(0.0, 1.0), (2.0, 0.0)];
/// assert!(!path.is_closed());
/// assert_eq!(path.curve_count(), 1);
/// assert_eq!(path.nodes()[1].position(), vec2(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! path_open {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut nodes = ::std::vec::Vec::with_capacity(size);
            $(
                nodes.push($crate::path::PathNode::corner($x.0, $x.1));
            )*
            $crate::path::Path::new(nodes, false)
        }
    };
}

/// Construct a closed path of corner nodes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::path_closed;
/// # use clip_path_geom::path::*;
/// # use clip_path_geom::core::math::*;
/// let path: Path = path_closed![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)];
/// assert!(path.is_closed());
/// assert_eq!(path.curve_count(), 3);
/// assert_eq!(path.nodes()[0].handle_out(), vec2(0.0, 0.0));
/// ```
#[macro_export]
macro_rules! path_closed {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut nodes = ::std::vec::Vec::with_capacity(size);
            $(
                nodes.push($crate::path::PathNode::corner($x.0, $x.1));
            )*
            $crate::path::Path::new(nodes, true)
        }
    };
}

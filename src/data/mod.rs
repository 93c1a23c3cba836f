/// Data layer: course records, loading, and the filter/sort pipeline.
///
/// Architecture:
/// ```text
///   courselist.dat
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → CourseList (malformed lines dropped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  CourseList   │  Vec<CourseRecord>, file order
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year predicate + sort key → FilteredView
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;

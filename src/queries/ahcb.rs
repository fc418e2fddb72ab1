//! Atlas of Historical County Boundaries. The database assembles the GeoJSON
//! documents; handlers pass them through untouched.

use crate::service::validation::DateRange;
use crate::sql::Statement;

/// States and territories exist in the dataset from the Treaty of Paris onward.
pub const STATES_RANGE: DateRange = DateRange::new((1783, 9, 3), (2000, 12, 31));
pub const COUNTIES_RANGE: DateRange = DateRange::new((1629, 1, 1), (2000, 12, 31));

pub static STATES: Statement = Statement::new(
    "ahcb_states",
    r#"
SELECT json_build_object(
    'type', 'FeatureCollection',
    'features', COALESCE(json_agg(
        json_build_object(
            'type', 'Feature',
            'id', s.id,
            'geometry', ST_AsGeoJSON(s.geom, 6)::json,
            'properties', json_build_object(
                'name', s.name,
                'abbr_name', s.abbr_name,
                'terr_type', s.terr_type,
                'full_name', s.full_name,
                'start_date', s.start_date,
                'end_date', s.end_date
            )
        ) ORDER BY s.id
    ), '[]'::json)
)::text
FROM ahcb.states s
WHERE s.start_date <= $1 AND s.end_date >= $1
"#,
);

/// Returns `(feature_count, document)` so an unknown id can be told apart
/// from a valid empty collection without re-parsing the document.
pub static COUNTY_BY_ID: Statement = Statement::new(
    "ahcb_county_by_id",
    r#"
SELECT count(f.id),
    json_build_object(
        'type', 'FeatureCollection',
        'features', COALESCE(json_agg(
            json_build_object(
                'type', 'Feature',
                'id', f.id,
                'geometry', ST_AsGeoJSON(f.geom, 6)::json,
                'properties', json_build_object(
                    'name', f.name,
                    'state_terr', f.state_terr,
                    'full_name', f.full_name,
                    'start_date', f.start_date,
                    'end_date', f.end_date
                )
            )
        ), '[]'::json)
    )::text
FROM ahcb.counties f
WHERE f.start_date <= $1 AND f.end_date >= $1 AND f.id = $2
"#,
);

/// Inner select for the county collection; filters are appended per request.
pub const COUNTIES_BASE: &str =
    "SELECT c.id, c.name, c.state_terr, c.full_name, c.start_date, c.end_date, c.geom FROM ahcb.counties c";

pub const COUNTIES_COLLECTION_PREFIX: &str = r#"
SELECT json_build_object(
    'type', 'FeatureCollection',
    'features', COALESCE(json_agg(
        json_build_object(
            'type', 'Feature',
            'id', f.id,
            'geometry', ST_AsGeoJSON(f.geom, 6)::json,
            'properties', json_build_object(
                'name', f.name,
                'state_terr', f.state_terr,
                'full_name', f.full_name,
                'start_date', f.start_date,
                'end_date', f.end_date
            )
        ) ORDER BY f.state_terr, f.name
    ), '[]'::json)
)::text
FROM ("#;

pub const COUNTIES_COLLECTION_SUFFIX: &str = ") AS f";

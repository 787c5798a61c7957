//! GPX import and three-file export of the converted route

use crate::bryton::coords::degrees_to_fixed;
use crate::bryton::direction::DirectionCode;
use crate::bryton::summary::Summary;
use crate::bryton::track::{GeoPoint, Track};
use crate::bryton::waypoint::{Waypoint, encode_tinfo};
use crate::bryton::{BrytonError, Result};
use geo::Rect;
use std::path::{Path, PathBuf};

/// Earth's radius in meters, for Haversine distances.
const EARTH_RADIUS_M: f64 = 6371000.0;

/// A route converted for the device: one summary, one track point sequence,
/// and the waypoint turn instructions.
///
/// Populated once by [`Route::from_gpx`] and consumed read-only by
/// [`Route::export`]; nothing is mutated in between.
#[derive(Clone, Debug)]
pub struct Route {
    summary: Summary,
    track: Track,
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Build the device model from a parsed GPX document.
    ///
    /// The summary describes the whole document (every track and segment);
    /// the exported track is reduced to the first segment of the first track
    /// by [`first_segment_points`]. Waypoints are resolved against the
    /// reduced track, so a waypoint from a later segment keeps index 0.
    ///
    /// Fails with [`BrytonError::EmptyTrack`] when no track in the document
    /// holds any points.
    pub fn from_gpx(gpx: &gpx::Gpx) -> Result<Self> {
        let bounds = compute_bounds(gpx).ok_or(BrytonError::EmptyTrack)?;
        let coordinate_count = total_points(gpx);
        let total_distance = total_distance_3d(gpx);

        tracing::info!(points = coordinate_count, "read track points");
        tracing::info!("total distance {:.2} km", total_distance / 1000.0);

        let summary = Summary {
            coordinate_count: coordinate_count as i16,
            bbox_north: degrees_to_fixed(bounds.max().y),
            bbox_south: degrees_to_fixed(bounds.min().y),
            bbox_east: degrees_to_fixed(bounds.max().x),
            bbox_west: degrees_to_fixed(bounds.min().x),
            total_distance_m: total_distance as i32,
        };

        let track = Track::new(
            first_segment_points(gpx)
                .iter()
                .map(|point| GeoPoint::from_degrees(point.point().y(), point.point().x()))
                .collect(),
        );

        tracing::info!(waypoints = gpx.waypoints.len(), "read waypoints");
        let waypoints = gpx
            .waypoints
            .iter()
            .map(|waypoint| {
                let point = GeoPoint::from_degrees(waypoint.point().y(), waypoint.point().x());
                let marker = waypoint.symbol.as_deref().unwrap_or_default();
                Waypoint::new(
                    track.coordinate_index(point),
                    DirectionCode::from_marker(marker),
                    waypoint.name.as_deref().unwrap_or_default(),
                )
            })
            .collect();

        Ok(Self {
            summary,
            track,
            waypoints,
        })
    }

    /// Read and parse a GPX file, then build the device model from it.
    ///
    /// A parse failure aborts here, before any output file is touched.
    pub fn from_gpx_file(path: &Path) -> Result<Self> {
        tracing::info!("reading {}", path.display());
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let gpx = gpx::read(reader)?;
        Self::from_gpx(&gpx)
    }

    /// Write the three device files named from `out_base` (see
    /// [`output_path`] for the naming rule).
    ///
    /// Each encoder's buffer is written whole with a single `fs::write`, so
    /// an individual file is never left partially written. There is no
    /// rollback across files: a failure on the second or third file leaves
    /// the earlier ones in place.
    pub fn export(&self, out_base: &Path) -> Result<()> {
        write_file(output_path(out_base, ".smy"), self.summary.encode())?;
        write_file(output_path(out_base, ".track"), self.track.encode())?;
        write_file(output_path(out_base, ".tinfo"), encode_tinfo(&self.waypoints))?;
        Ok(())
    }

    /// The summary record.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// The track point sequence exported to `.track`.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// The waypoint records exported to `.tinfo`.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
}

/// Reduce the GPX track-of-segments structure to the single flat point
/// sequence the device navigates: the first segment of the first track.
///
/// Further tracks and segments are deliberately ignored; the summary still
/// accounts for them.
pub fn first_segment_points(gpx: &gpx::Gpx) -> &[gpx::Waypoint] {
    gpx.tracks
        .first()
        .and_then(|track| track.segments.first())
        .map(|segment| segment.points.as_slice())
        .unwrap_or_default()
}

/// Bounding box over every point in the document, in degrees
/// (x = longitude, y = latitude). `None` when no track holds any points.
fn compute_bounds(gpx: &gpx::Gpx) -> Option<Rect<f64>> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let mut found_point = false;

    for track in &gpx.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                let point = waypoint.point();
                min_x = min_x.min(point.x());
                min_y = min_y.min(point.y());
                max_x = max_x.max(point.x());
                max_y = max_y.max(point.y());
                found_point = true;
            }
        }
    }

    found_point.then(|| {
        Rect::new(
            geo::Coord { x: min_x, y: min_y },
            geo::Coord { x: max_x, y: max_y },
        )
    })
}

/// Number of track points across every track and segment.
fn total_points(gpx: &gpx::Gpx) -> usize {
    gpx.tracks
        .iter()
        .map(|track| {
            track
                .segments
                .iter()
                .map(|segment| segment.points.len())
                .sum::<usize>()
        })
        .sum()
}

/// Total path length in meters across every track and segment.
///
/// Haversine distance between consecutive points, combined with the
/// elevation change by Pythagoras when both points carry elevation.
fn total_distance_3d(gpx: &gpx::Gpx) -> f64 {
    let mut total = 0.0;

    for track in &gpx.tracks {
        for segment in &track.segments {
            for pair in segment.points.windows(2) {
                let flat = haversine_m(&pair[0], &pair[1]);
                total += match (pair[0].elevation, pair[1].elevation) {
                    (Some(e1), Some(e2)) => flat.hypot(e2 - e1),
                    _ => flat,
                };
            }
        }
    }

    total
}

/// Haversine distance between two points in meters.
fn haversine_m(p1: &gpx::Waypoint, p2: &gpx::Waypoint) -> f64 {
    let (p1, p2) = (p1.point(), p2.point());

    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let delta_lat = (p2.y() - p1.y()).to_radians();
    let delta_lon = (p2.x() - p1.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Build one output path from the caller-supplied name: the file name is
/// truncated at its first `.` (so `my.route.gpx` becomes `my`) and the
/// device extension appended. A name without a `.` is used whole.
fn output_path(base: &Path, extension: &str) -> PathBuf {
    let name = base
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    base.with_file_name(format!("{stem}{extension}"))
}

fn write_file(path: PathBuf, bytes: Vec<u8>) -> Result<()> {
    std::fs::write(&path, &bytes)?;
    tracing::info!("{} bytes saved to {}", bytes.len(), path.display());
    Ok(())
}

use crate::db::models::{ModeRow, ModeZone};

/// Collapse consecutive captures with the same `mode` into zones.
///
/// A zone closes at the timestamp of the capture that opens the next zone, so
/// zones touch without gaps. The final zone ends at the last capture itself.
pub fn group_modes<I>(rows: I) -> Vec<ModeZone>
where
    I: IntoIterator<Item = ModeRow>,
{
    let mut zones = Vec::new();
    let mut current: Option<ModeZone> = None;

    for row in rows {
        match &mut current {
            Some(zone) if zone.mode == row.mode => {
                zone.end = row.timestamp;
            }
            _ => {
                if let Some(mut zone) = current.take() {
                    zone.end = row.timestamp.clone();
                    zones.push(zone);
                }
                current = Some(ModeZone {
                    start: row.timestamp.clone(),
                    end: row.timestamp,
                    mode: row.mode,
                });
            }
        }
    }

    if let Some(zone) = current {
        zones.push(zone);
    }

    zones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ts: &str, mode: Option<&str>) -> ModeRow {
        ModeRow {
            timestamp: ts.to_string(),
            mode: mode.map(str::to_string),
        }
    }

    fn zone(start: &str, end: &str, mode: Option<&str>) -> ModeZone {
        ModeZone {
            start: start.to_string(),
            end: end.to_string(),
            mode: mode.map(str::to_string),
        }
    }

    #[test]
    fn no_rows_no_zones() {
        assert!(group_modes(Vec::new()).is_empty());
    }

    #[test]
    fn single_row_is_a_point_zone() {
        assert_eq!(
            group_modes(vec![row("t0", Some("day"))]),
            vec![zone("t0", "t0", Some("day"))]
        );
    }

    #[test]
    fn zones_touch_at_transitions() {
        let rows = vec![
            row("t0", Some("night")),
            row("t1", Some("night")),
            row("t2", Some("transition")),
            row("t3", Some("day")),
            row("t4", Some("day")),
            row("t5", Some("day")),
        ];

        assert_eq!(
            group_modes(rows),
            vec![
                zone("t0", "t2", Some("night")),
                zone("t2", "t3", Some("transition")),
                zone("t3", "t5", Some("day")),
            ]
        );
    }

    #[test]
    fn missing_mode_is_its_own_zone() {
        let rows = vec![
            row("t0", Some("day")),
            row("t1", None),
            row("t2", None),
            row("t3", Some("day")),
        ];

        assert_eq!(
            group_modes(rows),
            vec![
                zone("t0", "t1", Some("day")),
                zone("t1", "t3", None),
                zone("t3", "t3", Some("day")),
            ]
        );
    }

    #[test]
    fn alternating_modes_cover_the_range() {
        let rows: Vec<ModeRow> = (0..10)
            .map(|i| {
                let mode = if i % 2 == 0 { "day" } else { "night" };
                row(&format!("t{i}"), Some(mode))
            })
            .collect();

        let zones = group_modes(rows);
        assert_eq!(zones.len(), 10);
        assert_eq!(zones[0].start, "t0");
        assert_eq!(zones.last().unwrap().end, "t9");
        for pair in zones.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_ne!(pair[0].mode, pair[1].mode);
        }
    }
}

//! Train schedules.
//!
//! A [`Schedule`] is an ordered list of stops plus the locomotives it
//! governs, referenced by entity number. Wait-condition payloads are opaque:
//! their shape depends on `type`/`compare_type` and is carried through
//! without interpretation.

use serde::{Deserialize, Serialize};

/// One train schedule and the locomotives following it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Stops, in travel order.
    pub schedule: Vec<ScheduleRecord>,
    /// `Entity::entity_number` foreign keys of the governed locomotives.
    pub locomotives: Vec<u64>,
}

/// One stop in a schedule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRecord {
    pub station: String,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub wait_conditions: Vec<WaitCondition>,
}

/// One wait condition at a stop.
///
/// `kind` (wire key `type`) and `compare_type` are opaque tokens; `ticks`
/// applies to time/inactivity conditions and `condition` holds the circuit
/// or fluid comparison payload for the kinds that use one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitCondition {
    #[serde(rename = "type")]
    pub kind: String,
    pub compare_type: String,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub ticks: u32,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub condition: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wait_conditions_are_omitted() {
        let record = ScheduleRecord {
            station: "Iron pickup".into(),
            wait_conditions: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("wait_conditions").is_none());
        assert_eq!(json["station"], serde_json::json!("Iron pickup"));
    }

    #[test]
    fn zero_ticks_are_omitted() {
        let wc = WaitCondition {
            kind: "full".into(),
            compare_type: "or".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&wc).unwrap();
        assert!(json.get("ticks").is_none());
        assert_eq!(json["type"], serde_json::json!("full"));
        assert_eq!(json["compare_type"], serde_json::json!("or"));
    }

    #[test]
    fn condition_payload_is_preserved() {
        let raw = r#"{
            "type": "circuit",
            "compare_type": "and",
            "condition": {
                "first_signal": {"type": "item", "name": "iron-plate"},
                "comparator": "<",
                "constant": 1000
            }
        }"#;
        let wc: WaitCondition = serde_json::from_str(raw).unwrap();
        assert_eq!(wc.kind, "circuit");
        let json = serde_json::to_value(&wc).unwrap();
        assert_eq!(json["condition"]["constant"], serde_json::json!(1000));
        let back: WaitCondition = serde_json::from_value(json).unwrap();
        assert_eq!(back, wc);
    }

    #[test]
    fn schedule_round_trips_stop_order_and_locomotives() {
        let schedule = Schedule {
            schedule: vec![
                ScheduleRecord {
                    station: "Load".into(),
                    wait_conditions: vec![WaitCondition {
                        kind: "inactivity".into(),
                        compare_type: "or".into(),
                        ticks: 300,
                        ..Default::default()
                    }],
                },
                ScheduleRecord {
                    station: "Unload".into(),
                    wait_conditions: vec![WaitCondition {
                        kind: "empty".into(),
                        compare_type: "or".into(),
                        ..Default::default()
                    }],
                },
            ],
            locomotives: vec![12, 19],
        };
        let json = serde_json::to_string(&schedule).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
        assert_eq!(back.schedule[0].station, "Load");
        assert_eq!(back.locomotives, vec![12, 19]);
    }
}

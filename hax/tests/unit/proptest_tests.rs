//! Property-based tests using proptest

use hax::ingest::{aggregate, decode_reports, ingest, EntryFailurePolicy, IngestOutcome, IngestPolicy};
use hax_common::types::{AvailabilityState, CheckResult};
use hax_common::Fid;
use proptest::prelude::*;
use serde_json::{json, Value};

fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("passing".to_string()),
        1 => Just("critical".to_string()),
        1 => Just("warning".to_string()),
        1 => Just("Passing".to_string()),
        1 => "[a-zA-Z ]{0,10}",
    ]
}

fn report(fid: Fid, statuses: &[String]) -> Value {
    let checks: Vec<Value> = statuses.iter().map(|s| json!({ "Status": s })).collect();
    json!({ "Service": { "ID": fid.to_string() }, "Checks": checks })
}

proptest! {
    /// 全チェックが "passing" のときのみOnline
    #[test]
    fn online_iff_every_status_is_passing(statuses in prop::collection::vec(status_strategy(), 0..8)) {
        let checks: Vec<CheckResult> = statuses.iter().cloned().map(CheckResult::new).collect();
        let expected = if statuses.iter().all(|s| s == "passing") {
            AvailabilityState::Online
        } else {
            AvailabilityState::Offline
        };
        prop_assert_eq!(AvailabilityState::from_checks(&checks), expected);
    }

    /// N番目の入力がN番目の出力に対応する
    #[test]
    fn aggregation_preserves_order_and_length(
        entries in prop::collection::vec(
            ((any::<u64>(), any::<u64>()), prop::collection::vec(status_strategy(), 0..4)),
            0..16,
        ),
    ) {
        let reports: Vec<Value> = entries
            .iter()
            .map(|((container, key), statuses)| report(Fid::new(*container, *key), statuses))
            .collect();

        let result = aggregate(reports, EntryFailurePolicy::AbortBatch).unwrap();
        prop_assert_eq!(result.states.len(), entries.len());
        for (state, ((container, key), statuses)) in result.states.iter().zip(&entries) {
            prop_assert_eq!(state.fid, Fid::new(*container, *key));
            let online = statuses.iter().all(|s| s == "passing");
            prop_assert_eq!(state.status == AvailabilityState::Online, online);
        }
    }

    /// Fidは表示形式からパースし直すと同じ値になる
    #[test]
    fn fid_display_parses_back(container in any::<u64>(), key in any::<u64>()) {
        let fid = Fid::new(container, key);
        prop_assert_eq!(fid.to_string().parse::<Fid>().unwrap(), fid);
    }

    /// 任意のバイト列でもパニックせず、既定ポリシーでは必ず転送か破棄になる
    #[test]
    fn ingest_never_panics(body in prop::collection::vec(any::<u8>(), 0..256)) {
        match ingest(&body, IngestPolicy::default()) {
            IngestOutcome::Forward(_) | IngestOutcome::Abort(_) => {}
            IngestOutcome::Reject(err) => prop_assert!(false, "unexpected reject: {}", err),
        }
    }

    /// 空白のみのボディは空の一覧
    #[test]
    fn whitespace_body_decodes_to_empty(body in "[ \t\r\n]{0,16}") {
        prop_assert!(decode_reports(body.as_bytes()).unwrap().is_empty());
    }
}

//! Tests for the script driver and reports

use triage_scheduler::config::SchedulerConfig;
use triage_scheduler::core::TriageScheduler;
use triage_scheduler::runtime::{
    render_transcript, Command, Script, ScriptError, ScriptEvent, ScriptRunner,
};

#[test]
fn test_emergency_room_demo_events() {
    let mut s = TriageScheduler::new(20);
    let events = ScriptRunner::default()
        .run(&mut s, &Script::emergency_room_demo())
        .unwrap();

    let served: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ScriptEvent::Served { entity, .. } => Some(entity.label()),
            _ => None,
        })
        .collect();
    assert_eq!(
        served,
        vec![
            "Sita Sharma (Critical Injury)",
            "Amit Patel (Urgent Care)",
            "John Doe (Head Trauma)",
            "Ravi Kumar (Stable Condition)",
            "Priya Singh (Minor Issue)",
        ]
    );
    assert_eq!(events[events.len() - 2], ScriptEvent::NothingToServe);
    assert_eq!(s.history().len(), 5);
}

#[test]
fn test_emergency_room_demo_transcript() {
    let mut s = TriageScheduler::new(20);
    let events = ScriptRunner::default()
        .run(&mut s, &Script::emergency_room_demo())
        .unwrap();
    let transcript = render_transcript(&events);

    assert!(transcript.starts_with(
        "NEW PATIENT: 'Ravi Kumar (Stable Condition)' added to waiting list with priority 3."
    ));
    assert!(transcript.contains("Total patients waiting: 4"));
    assert!(transcript
        .contains("Next to be treated: ID: 2, Name: Sita Sharma (Critical Injury), Priority: 1"));
    assert!(transcript
        .contains("Next to be treated: ID: 5, Name: John Doe (Head Trauma), Priority: 1"));
    assert!(transcript.contains("SYSTEM: No patients in the waiting list to treat."));
    assert!(transcript.ends_with(
        "  ID: 4, Name: Priya Singh (Minor Issue), Priority: 4\n-----------------------------"
    ));
}

#[test]
fn test_full_waiting_list_in_script() {
    let mut s = TriageScheduler::new(1);
    let script = Script {
        commands: vec![
            Command::Admit {
                label: "a".into(),
                priority: 1,
            },
            Command::Admit {
                label: "b".into(),
                priority: 1,
            },
        ],
    };
    let events = ScriptRunner::default().run(&mut s, &script).unwrap();
    assert_eq!(
        events[1].to_string(),
        "Error: Waiting list is full. Cannot add more patients."
    );
    assert_eq!(s.next_id(), 3);
}

#[test]
fn test_runner_uses_config_label_limit() {
    let cfg = SchedulerConfig {
        capacity: 2,
        history_capacity: None,
        max_label_len: 3,
    };
    let mut s = TriageScheduler::new(cfg.capacity);
    let script = Script::from_json_str(
        r#"{"commands":[{"op":"admit","label":"abc","priority":1},{"op":"admit","label":"abcd","priority":1}]}"#,
    )
    .unwrap();

    let err = ScriptRunner::from_config(&cfg).run(&mut s, &script).unwrap_err();
    assert!(matches!(err, ScriptError::LabelTooLong { len: 4, max: 3 }));
    // first admission went through before the bad label
    assert_eq!(s.waiting_len(), 1);
}

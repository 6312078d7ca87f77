use podium::{
    assign_places, checked_assign_places, placements_match, PlacedUser, ScoredUser, Thresholds,
    MAX_ROSTER_SIZE, RESERVED_PLACES,
};
use pretty_assertions::assert_eq;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn roster(entries: &[(&str, u32)]) -> Vec<ScoredUser> {
    entries
        .iter()
        .map(|(user_id, score)| ScoredUser::new(*user_id, *score))
        .collect()
}

fn placed(entries: &[(&str, u32)]) -> Vec<PlacedUser> {
    entries
        .iter()
        .map(|(user_id, place)| PlacedUser::new(*user_id, *place))
        .collect()
}

#[test]
fn test_golden_scenarios() {
    init_logs();
    let thresholds = Thresholds::new(100, 50, 10);

    // Nobody reaches any threshold: the field starts at place 4.
    let answer = assign_places(&roster(&[("id1", 3), ("id2", 2), ("id3", 1)]), &thresholds);
    assert!(placements_match(
        &answer,
        &placed(&[("id1", 4), ("id2", 5), ("id3", 6)])
    ));

    // Places 1 and 2 are claimed, place 3 goes unclaimed and cascades.
    let answer = assign_places(
        &roster(&[
            ("id1", 100),
            ("id5", 99),
            ("id2", 3),
            ("id3", 2),
            ("id4", 1),
        ]),
        &thresholds,
    );
    assert!(placements_match(
        &answer,
        &placed(&[("id1", 1), ("id5", 2), ("id2", 4), ("id3", 5), ("id4", 6)])
    ));

    // A lone second-tier qualifier starts at place 2.
    let answer = assign_places(&roster(&[("id1", 55)]), &thresholds);
    assert!(placements_match(&answer, &placed(&[("id1", 2)])));

    // A whole field of second-tier qualifiers fills forward from place 2.
    let answer = assign_places(
        &roster(&[("id4", 55), ("id3", 56), ("id2", 57), ("id1", 58)]),
        &thresholds,
    );
    assert!(placements_match(
        &answer,
        &placed(&[("id4", 5), ("id3", 4), ("id2", 3), ("id1", 2)])
    ));
}

#[test]
fn test_json_payload_end_to_end() {
    init_logs();
    let users: Vec<ScoredUser> = serde_json::from_str(
        r#"[
            {"userId": "id1", "score": 100},
            {"userId": "id5", "score": 99},
            {"userId": "id2", "score": 3},
            {"userId": "id3", "score": 2},
            {"userId": "id4", "score": 1}
        ]"#,
    )
    .expect("users payload should deserialize");

    let thresholds: Thresholds = serde_json::from_str(
        r#"{"firstPlaceMinScore": 100, "secondPlaceMinScore": 50, "thirdPlaceMinScore": 10}"#,
    )
    .expect("thresholds payload should deserialize");

    let answer = checked_assign_places(&users, &thresholds).expect("payload is contract-valid");

    let expected: Vec<PlacedUser> = serde_json::from_str(
        r#"[
            {"userId": "id1", "place": 1},
            {"userId": "id5", "place": 2},
            {"userId": "id2", "place": 4},
            {"userId": "id3", "place": 5},
            {"userId": "id4", "place": 6}
        ]"#,
    )
    .expect("expected payload should deserialize");
    assert!(placements_match(&answer, &expected));
}

#[test]
fn test_placed_user_wire_shape() {
    let answer = assign_places(&roster(&[("id1", 55)]), &Thresholds::new(100, 50, 10));
    let json = serde_json::to_value(&answer).expect("placement serializes");

    assert_eq!(json, serde_json::json!([{"userId": "id1", "place": 2}]));
}

#[test]
fn test_phantom_podium_places_best_finisher_fourth() {
    let answer = assign_places(&roster(&[("solo", 9)]), &Thresholds::new(100, 50, 10));

    assert_eq!(answer[0].place, RESERVED_PLACES + 1);
}

#[test]
fn test_contract_ceiling_roster() {
    init_logs();
    // 100 distinct scores; the top scorer qualifies for place 1, so the
    // whole board numbers contiguously from 1 to 100.
    let users: Vec<ScoredUser> = (1..=MAX_ROSTER_SIZE as u32)
        .map(|score| ScoredUser::new(format!("user-{score}"), score))
        .collect();
    let thresholds = Thresholds::new(90, 60, 30);

    let answer = checked_assign_places(&users, &thresholds).expect("ceiling roster is valid");

    assert_eq!(answer.len(), MAX_ROSTER_SIZE);
    for user in &users {
        let place = answer
            .iter()
            .find(|candidate| candidate.user_id == user.user_id)
            .expect("every user keeps their identifier")
            .place;
        assert_eq!(place, MAX_ROSTER_SIZE as u32 + 1 - user.score);
    }
}

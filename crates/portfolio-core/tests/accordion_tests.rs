mod common;

use common::*;
use portfolio_core::*;

fn panel_moves(c: &TestController, id: u32) -> Vec<(Props, TweenOptions)> {
    c.tween_engine()
        .animations_of(&Target::ServiceDetails(ServiceId(id)))
}

fn has(props: &Props, name: &str, value: PropValue) -> bool {
    props.iter().any(|p| p.name == name && p.value == value)
}

#[test]
fn opening_one_panel_expands_it() {
    let mut c = mounted();
    assert_eq!(c.select_service(ServiceId(1)), Some(ServiceId(1)));

    let moves = panel_moves(&c, 1);
    assert_eq!(moves.len(), 1);
    assert!(has(&moves[0].0, "height", PropValue::Auto));
    assert!(has(&moves[0].0, "opacity", PropValue::Num(1.0)));
    assert_eq!(moves[0].1.duration, Some(0.5));
    assert_eq!(moves[0].1.ease, Some(Ease::Power2Out));

    let icon = c
        .tween_engine()
        .animations_of(&Target::ServiceIcon(ServiceId(1)));
    assert!(has(&icon[0].0, "rotation", PropValue::Num(45.0)));
}

#[test]
fn opening_b_closes_a_first() {
    let mut c = mounted();
    c.select_service(ServiceId(1));
    let seen = c.tween_engine().calls.len();
    assert_eq!(c.select_service(ServiceId(3)), Some(ServiceId(3)));
    assert_eq!(c.view().open_service_id, Some(ServiceId(3)));

    let panels: Vec<_> = c
        .tween_engine()
        .calls[seen..]
        .iter()
        .filter_map(|call| match call {
            TweenCall::Animate(_, t @ Target::ServiceDetails(_), p, o) => {
                Some((t.clone(), p.clone(), o.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(panels.len(), 2, "close A and open B");
    assert_eq!(panels[0].0, Target::ServiceDetails(ServiceId(1)));
    assert!(has(&panels[0].1, "height", PropValue::Num(0.0)));
    assert!(has(&panels[0].1, "opacity", PropValue::Num(0.0)));
    assert_eq!(panels[0].2.duration, Some(0.4));
    assert_eq!(panels[1].0, Target::ServiceDetails(ServiceId(3)));
    assert!(has(&panels[1].1, "height", PropValue::Auto));
}

#[test]
fn selecting_open_panel_collapses_it() {
    let mut c = mounted();
    c.select_service(ServiceId(2));
    assert_eq!(c.select_service(ServiceId(2)), None);
    assert_eq!(c.view().open_service_id, None);

    let moves = panel_moves(&c, 2);
    assert_eq!(moves.len(), 2);
    assert!(has(&moves[1].0, "height", PropValue::Num(0.0)));
    let icon = c
        .tween_engine()
        .animations_of(&Target::ServiceIcon(ServiceId(2)));
    assert!(has(&icon[1].0, "rotation", PropValue::Num(0.0)));
}

#[test]
fn at_most_one_panel_open_over_any_sequence() {
    let mut c = mounted();
    let picks = [1, 2, 2, 5, 3, 3, 3, 4, 1];
    let mut expected: Option<u32> = None;
    for id in picks {
        expected = if expected == Some(id) { None } else { Some(id) };
        assert_eq!(c.select_service(ServiceId(id)), expected.map(ServiceId));
    }
}

#[test]
fn unknown_service_leaves_state_alone() {
    let mut c = mounted();
    c.select_service(ServiceId(4));
    assert_eq!(c.select_service(ServiceId(99)), Some(ServiceId(4)));
    assert!(panel_moves(&c, 99).is_empty());
}

#[test]
fn missing_panel_is_a_silent_no_op() {
    let tweens = RecordingTweens::without(&[Target::ServiceDetails(ServiceId(5))]);
    let mut c = controller_with(tweens, all_sections());
    c.mount(&desktop_layout()).unwrap();
    assert_eq!(c.select_service(ServiceId(5)), Some(ServiceId(5)));
    assert!(panel_moves(&c, 5).is_empty());
}

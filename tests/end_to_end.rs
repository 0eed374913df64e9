//! Generator response → session → grid → HTML.

use u_timetable::axis::Weekday;
use u_timetable::layout::Cell;
use u_timetable::protocol::GenerateResponse;
use u_timetable::render::HtmlRenderer;
use u_timetable::session::Session;
use u_timetable::summary::{conflict_alert, exception_alert};

const RESPONSE: &str = r#"{
    "success": true,
    "message": "found 2",
    "schedules": [
        {
            "sections": [
                {"course": "MATH101", "section": 1, "group": 0},
                {"course": "PHYS101", "section": 2, "group": 1}
            ],
            "blocks": [
                {"curso": "MATH101", "seccion": 1, "grupo": 0, "dia": "Lunes",
                 "hora_ini": "08:00:00", "hora_fin": "09:00:00", "campus": "Campus Norte"},
                {"curso": "PHYS101", "seccion": 2, "grupo": 1, "dia": "LUNES",
                 "hora_ini": "08:30:00", "hora_fin": "09:30:00"},
                {"curso": "MATH101", "seccion": 1, "grupo": 0, "dia": "Miércoles",
                 "hora_ini": "10:00", "hora_fin": "10:50"}
            ],
            "score": 12.0,
            "has_conflicts": true,
            "conflicts": ["MATH101 and PHYS101 overlap on Monday"],
            "conflict_types": ["overlap"],
            "has_valid_topones": false
        },
        {
            "sections": [],
            "blocks": [
                {"curso": "MATH101", "seccion": 3, "grupo": 0, "dia": "Martes",
                 "hora_ini": "08:00", "hora_fin": "09:00"}
            ],
            "has_conflicts": false,
            "has_valid_topones": true,
            "valid_topones": ["approved"],
            "valid_topon_types": ["parcial"]
        }
    ]
}"#;

fn session() -> Session {
    let mut s = Session::new();
    s.begin_generate(&["MATH101", "PHYS101"]).unwrap();
    let response = GenerateResponse::from_json(RESPONSE);
    s.finish_generate(response).unwrap();
    s
}

#[test]
fn monday_collision_scenario() {
    let s = session();
    assert_eq!(s.counter().as_deref(), Some("1 / 2"));

    let grid = s.grid().unwrap();
    let cell = grid.cell(0, Weekday::Monday).unwrap();
    let Cell::Collision(container) = cell else {
        panic!("expected a collision container at 08:00, got {cell:?}");
    };
    assert_eq!(container.cluster.len(), 2);
    assert_eq!(container.columns.len(), 2);
    assert_eq!(container.span, 9);
    assert_eq!(container.cluster.start_min(), 480);
    assert_eq!(container.cluster.end_min(), 570);
    for r in 1..9 {
        assert_eq!(grid.cell(r, Weekday::Monday), Some(&Cell::Covered));
    }

    // Wednesday block renders alone with a 5-row span at 10:00.
    let wed = grid.cell(12, Weekday::Wednesday).unwrap();
    assert!(matches!(wed, Cell::Single(s) if s.span == 5));
    assert_eq!(grid.placed_block_count(), 3);

    // Conflict status comes from the generator's flag, not the layout.
    let current = s.current().unwrap();
    assert_eq!(conflict_alert(current).unwrap().title, "SCHEDULE CONFLICT");
    assert!(exception_alert(current).is_none());
}

#[test]
fn banner_and_navigation() {
    let mut s = session();
    assert_eq!(
        s.banner(),
        Some("1 schedules with valid exceptions and 1 with conflicts")
    );
    s.select_next();
    let current = s.current().unwrap();
    assert_eq!(
        exception_alert(current).unwrap().title,
        "VALID PARTIAL EXCEPTION"
    );
    assert_eq!(s.grid().unwrap().collisions().count(), 0);
    assert_eq!(s.select_next(), 1);
}

#[test]
fn html_output() {
    let s = session();
    let courses: Vec<&str> = s.current().unwrap().courses();
    let html = HtmlRenderer::new()
        .with_course_order(&courses)
        .render(&s.grid().unwrap());
    assert!(html.starts_with("<table class=\"schedule-table\">"));
    assert!(html.contains("collision-cell\" rowspan=\"9\""));
    assert!(html.contains("Campus Norte"));
    assert!(html.contains("<span class=\"block-time\">08:30 - 09:30</span>"));
    assert_eq!(html.matches("<tr>").count(), 80);
}

use super::*;
use crate::core::ArrowError;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<arrowDefs>
  <arrowDef>
    <straight>
      <segments count="1">
        <segment points="0,0,5,2" />
      </segments>
    </straight>
    <landHook>
      <segments count="2">
        <segment points="0,0,0,6" />
        <segment points="0,6, 1.5 ,7.5" />
      </segments>
    </landHook>
  </arrowDef>
</arrowDefs>"#;

#[test]
fn test_parse_sample_library() {
    let library = parse_arrow_templates(SAMPLE).expect("Bibliothek erwartet");

    assert_eq!(library.len(), 2);
    assert_eq!(library.names().collect::<Vec<_>>(), vec!["straight", "landHook"]);

    let straight = library.get("straight").expect("straight erwartet");
    assert_eq!(straight.declared_count, 1);
    assert_eq!(straight.segments[0].to, DVec2::new(5.0, 2.0));
    assert!(straight.integrity_fault().is_none());

    let hook = library.get("landHook").expect("landHook erwartet");
    assert_eq!(hook.segments[1].to, DVec2::new(1.5, 7.5));
}

#[test]
fn test_count_mismatch_is_reported_but_kept() {
    let xml = r#"<arrowDefs><arrowDef><roadTic>
        <segments count="3"><segment points="0,0,0,3"/></segments>
    </roadTic></arrowDef></arrowDefs>"#;

    let library = parse_arrow_templates(xml).expect("Bibliothek erwartet");
    let tic = library.get("roadTic").expect("roadTic erwartet");

    assert_eq!(tic.segments.len(), 1);
    assert_eq!(
        tic.integrity_fault(),
        Some(ArrowError::TemplateDataMismatch {
            name: "roadTic".into(),
            declared: 3,
            found: 1,
        })
    );
}

#[test]
fn test_malformed_number_is_parse_error() {
    let xml = r#"<arrowDefs><arrowDef><straight>
        <segments count="1"><segment points="0,0,abc,2"/></segments>
    </straight></arrowDef></arrowDefs>"#;

    match parse_arrow_templates(xml) {
        Err(ArrowError::TemplateParseError { message }) => {
            assert!(message.contains("straight"), "Meldung: {message}");
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
}

#[test]
fn test_wrong_value_count_is_parse_error() {
    let err = parse_segment_points("0,0,1").expect_err("Fehler erwartet");
    assert!(format!("{err:#}").contains("4 Werte"));
}

#[test]
fn test_unclosed_template_is_parse_error() {
    let xml = r#"<arrowDefs><arrowDef><straight><segments count="0">"#;
    assert!(matches!(
        parse_arrow_templates(xml),
        Err(ArrowError::TemplateParseError { .. })
    ));
}

#[test]
fn test_to_polyline_keeps_record_order() {
    let library = parse_arrow_templates(SAMPLE).expect("Bibliothek erwartet");
    let polyline = library
        .get("landHook")
        .expect("landHook erwartet")
        .to_polyline();

    assert_eq!(polyline.len(), 2);
    assert_eq!(polyline.first_point(), Some(DVec2::ZERO));
    assert_eq!(polyline.last_point(), Some(DVec2::new(1.5, 7.5)));
}

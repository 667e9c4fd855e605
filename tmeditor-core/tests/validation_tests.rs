//! End-to-end validation against a menu snapshot

use tmeditor_core::*;

const MENU: &str = include_str!("fixtures/menu.toml");

fn menu() -> Menu {
    Menu::from_toml_str(MENU).unwrap()
}

#[test]
fn test_snapshot_loads() {
    let menu = menu();
    assert_eq!(menu.name, "L1Menu_Collisions_Test");
    assert_eq!(menu.algorithms().len(), 4);
    assert_eq!(menu.objects().len(), 2);
    assert_eq!(menu.externals()[0].signal_name(), "ZeroBias");
    assert_eq!(
        menu.cut_by_name("MU-QLTY_SNGL").unwrap().data_value(),
        Some("0xf000")
    );
    assert_eq!(
        menu.algorithm_by_name("L1_DoubleMu_OS").unwrap().comment,
        "opposite sign muon pair"
    );
}

#[test]
fn test_snapshot_algorithms_are_valid() {
    let menu = menu();
    for report in menu.validate_algorithms(&Config::strict().validator()) {
        assert!(report.is_ok(), "{}: {:?}", report.name, report.result);
    }
}

#[test]
fn test_offset_rule() {
    let menu = menu();
    assert!(validate_expression("comb{MU-ET1+0, MU-ET1+0}", &menu).is_ok());

    let token = "comb{MU-ET1+0, MU-ET1+1}";
    match validate_expression(token, &menu) {
        Err(Error::Rule(e)) => {
            assert_eq!(e.token(), Some(token));
            assert!(e.message().contains(token));
        }
        other => panic!("Expected offset violation, got {other:?}"),
    }
}

#[test]
fn test_distance_arity() {
    let menu = menu();
    let token = "dist{MU-ET1+0, MU-ET1+0, MU-ET1+0}";
    match validate_expression(token, &menu) {
        Err(Error::Rule(e)) => assert_eq!(e.token(), Some(token)),
        other => panic!("Expected arity violation, got {other:?}"),
    }
    assert!(validate_expression("dist{MU-ET1+0, MU-ET1+0}", &menu).is_ok());
}

#[test]
fn test_threshold_cut_spelling_matches_plain_objects() {
    let objects = extract_objects("MU-ET1+0 AND comb{MU1, EG-ET20}").unwrap();
    let names: Vec<_> = objects.iter().map(|object| object.name()).collect();
    assert_eq!(names, vec!["MU1", "EG20"]);
}

#[test]
fn test_delta_eta_range_example() {
    let mut menu = Menu::new("example");
    menu.add_scale(Scale::new(ObjectType::Mu, ScaleType::Eta, -2.5, 2.5));
    menu.import_cuts([
        Cut::range("DETA_0to6", None, CutType::DeltaEta, 0.0, 6.0),
        Cut::range("DETA_0to5", None, CutType::DeltaEta, 0.0, 5.0),
    ]);

    assert!(validate_expression("dist{MU10,MU10}[DETA_0to6]", &menu).is_err());
    assert!(validate_expression("dist{MU10,MU10}[DETA_0to5]", &menu).is_ok());
}

#[test]
fn test_delta_range_uses_each_object_scale() {
    let menu = menu();
    // EG reaches 10 in eta, MU only 4.9
    assert!(validate_expression("dist{EG10,EG20}[DETA_0to5p5]", &menu).is_ok());
    assert!(validate_expression("dist{MU10,EG20}[DETA_0to5p5]", &menu).is_err());
}

#[test]
fn test_strict_rules() {
    let menu = menu();
    let validator = Config::strict().validator();

    assert!(AlgorithmSyntaxValidator::new()
        .validate("MU10[MU-ETA_1p0]", &menu)
        .is_ok());
    assert!(validator.validate("MU10[MU-ETA_1p0]", &menu).is_err());
    assert!(validator
        .validate("comb{MU10,MU10}[MASS_10to50]", &menu)
        .is_err());
}

#[test]
fn test_extraction_determinism() {
    let expression = "MU10 AND EG20 OR MU10 AND comb{EG20,JET30[JET-ETA_2p52]}";
    let first: Vec<_> = extract_objects(expression)
        .unwrap()
        .into_iter()
        .map(|object| object.name().to_string())
        .collect();
    let second: Vec<_> = extract_objects(expression)
        .unwrap()
        .into_iter()
        .map(|object| object.name().to_string())
        .collect();
    assert_eq!(first, vec!["MU10", "EG20", "JET30"]);
    assert_eq!(first, second);
    assert_eq!(extract_cut_names(expression).unwrap(), vec!["JET-ETA_2p52"]);
}

#[test]
fn test_extraction_is_safe_across_threads() {
    let expression = "dist{MU10[MU-ETA_2p1],EG20}[DETA_0to1p6] AND EXT_ZeroBias+1";
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                (
                    extract_objects(expression).unwrap().len(),
                    extract_externals(expression).unwrap().len(),
                    extract_cut_names(expression).unwrap(),
                )
            })
        })
        .collect();
    for handle in handles {
        let (objects, externals, cuts) = handle.join().unwrap();
        assert_eq!(objects, 2);
        assert_eq!(externals, 1);
        assert_eq!(cuts, vec!["DETA_0to1p6", "MU-ETA_2p1"]);
    }
}

#[test]
fn test_import_between_menus() {
    let source = menu();
    let mut target = Menu::new("target");
    target.import_cuts(source.cuts().iter().cloned());

    let report = target
        .import_algorithms(source.algorithms().iter().cloned())
        .unwrap();
    assert_eq!(report.imported.len(), 4);
    assert!(report.renamed.is_empty());

    let report = target
        .import_algorithms(source.algorithms().iter().take(1).cloned())
        .unwrap();
    assert_eq!(report.imported, vec!["L1_SingleMu10_import0"]);
    assert_eq!(report.relocated[0].to, 4);
    assert!(target.objects().contains(&Object::parse("EG20").unwrap()));
}

//! Exchange file → model → dot.

use std::io::Write;

use ifc_dot::storage::ModelBackend;
use ifc_dot::{BackendConfig, EntityId, Error, IfcModel, InterestSet, LoadStats};
use pretty_assertions::assert_eq;

const HOUSE: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('house.ifc','2024-05-01T10:00:00',('Architect'),(''),'IfcOpenShell','IfcOpenShell','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
/* context */
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'House',$,$,$,$,$,$);
#2=IFCCARTESIANPOINT((0.,0.,0.));
#5=IFCSITE('1YvctVUKr0kugbFTf53O9L',$,'Site',$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
#6=IFCBUILDING('2YvctVUKr0kugbFTf53O9L',$,'Building',$,$,$,$,$,.ELEMENT.,$,$,$);
#7=IFCBUILDINGSTOREY('3YvctVUKr0kugbFTf53O9L',$,'Ground',$,$,$,$,$,.ELEMENT.,0.);
#10=IFCWALLSTANDARDCASE('4YvctVUKr0kugbFTf53O9L',$,'Wall',$,$,$,$,$,.STANDARD.);
#11=IFCDOOR('5YvctVUKr0kugbFTf53O9L',$,'Door',$,$,$,$,$,2.1,0.9,.DOOR.,.SINGLE_SWING_LEFT.,$);
#12=IFCOPENINGELEMENT('6YvctVUKr0kugbFTf53O9L',$,$,$,$,$,$,$,.OPENING.);
#13=IFCVIRTUALELEMENT('7YvctVUKr0kugbFTf53O9L',$,$,$,$,$,$,$);
#20=IFCRELAGGREGATES('8YvctVUKr0kugbFTf53O9L',$,$,$,#1,(#5));
#21=IFCRELAGGREGATES('9YvctVUKr0kugbFTf53O9L',$,$,$,#5,(#6));
#22=IFCRELAGGREGATES('AYvctVUKr0kugbFTf53O9L',$,$,$,#6,(#7));
#23=IFCRELCONTAINEDINSPATIALSTRUCTURE('BYvctVUKr0kugbFTf53O9L',$,$,$,(#10,#11,#13),#7);
#24=IFCRELVOIDSELEMENT('CYvctVUKr0kugbFTf53O9L',$,$,$,#10,#12);
#25=IFCRELFILLSELEMENT('DYvctVUKr0kugbFTf53O9L',$,$,$,#12,#11);
#26=IFCRELDEFINESBYPROPERTIES('EYvctVUKr0kugbFTf53O9L',$,$,$,(#10),#99);
ENDSEC;
END-ISO-10303-21;
"#;

fn step_file(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".ifc").tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file
}

fn house_file() -> tempfile::NamedTempFile {
    step_file(HOUSE.as_bytes())
}

fn to_dot(file: &tempfile::NamedTempFile) -> String {
    let model = IfcModel::open_step(file.path()).unwrap();
    let mut out = Vec::new();
    model.write_dot(&mut out, &InterestSet::new()).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_load_counts() {
    let file = house_file();
    let model = IfcModel::open_step(file.path()).unwrap();
    let backend = model.backend();

    // Project, site, building, storey, wall, door, opening, virtual element.
    assert_eq!(backend.entity_count().unwrap(), 8);
    assert_eq!(backend.relationship_count().unwrap(), 7);
    assert_eq!(backend.schema().as_deref(), Some("IFC4"));

    let storey: Vec<u64> = backend
        .decomposition(EntityId(7))
        .unwrap()
        .iter()
        .map(|e| e.id.0)
        .collect();
    assert_eq!(storey, vec![10, 11, 13]);
}

#[test]
fn test_house_to_dot() {
    let file = house_file();
    let model = IfcModel::open(&BackendConfig::Step { path: file.path().to_path_buf() }).unwrap();

    let mut out = Vec::new();
    let next = model.write_dot(&mut out, &InterestSet::new()).unwrap();
    let dot = String::from_utf8(out).unwrap();

    assert_eq!(
        dot,
        "strict graph G {\n\
         graph [overlap=false,splines=true,rankdir=LR];\n\
         \"#5=IfcSite\" [color=\"#ff99cc\",style=filled];\n\
         \"#6=IfcBuilding\" [color=\"#ff99cc\",style=filled];\n\
         \"#7=IfcBuildingStorey\" [color=\"#ff99cc\",style=filled];\n\
         \"#10=IfcWallStandardCase\" [color=\"#9999ff\",style=filled];\n\
         \"#11=IfcDoor\" [color=\"#99ccff\",style=filled];\n\
         \"#12=IfcOpeningElement\" [color=\"#cc99ff\",style=filled];\n\
         \"#5=IfcSite\"--\"#6=IfcBuilding\" [weight=9,style=solid];\n\
         \"#6=IfcBuilding\"--\"#7=IfcBuildingStorey\" [weight=9,style=solid];\n\
         \"#7=IfcBuildingStorey\"--\"#10=IfcWallStandardCase\" [weight=1,style=solid];\n\
         \"#7=IfcBuildingStorey\"--\"#11=IfcDoor\" [weight=1,style=solid];\n\
         \"#10=IfcWallStandardCase\"--\"#12=IfcOpeningElement\" [weight=9,style=solid];\n\
         \"#12=IfcOpeningElement\"--\"#11=IfcDoor\" [weight=9,style=solid];\n\
         subgraph id_5 {\n\
         cluster=true;\n\
         \"#5=IfcSite\";\n\
         \"#6=IfcBuilding\";\n\
         subgraph id_6 {\n\
         cluster=true;\n\
         \"#6=IfcBuilding\";\n\
         \"#7=IfcBuildingStorey\";\n\
         subgraph id_7 {\n\
         cluster=true;\n\
         \"#7=IfcBuildingStorey\";\n\
         \"#10=IfcWallStandardCase\";\n\
         \"#11=IfcDoor\";\n\
         }\n\
         }\n\
         }\n\
         }\n"
    );
    assert!(next.is_empty());
}

#[test]
fn test_focus_on_door() {
    let file = house_file();
    let model = IfcModel::open_step(file.path()).unwrap();

    let mut out = Vec::new();
    let next = model.write_dot(&mut out, &InterestSet::from([11])).unwrap();
    let dot = String::from_utf8(out).unwrap();

    assert!(dot.contains("\"#11=IfcDoor\" [color=\"#99ccff\",style=filled];"));
    assert_eq!(dot.lines().count(), 4);
    assert_eq!(next, InterestSet::from([7, 11, 12]));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = IfcModel::open_step(dir.path().join("nope.ifc")).err().unwrap();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_syntax_error_reports_position() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"ISO-10303-21;\nHEADER;\nENDSEC;\nDATA;\n#1=IFCWALL('x',;\nENDSEC;\nEND-ISO-10303-21;\n")
        .unwrap();
    let err = IfcModel::open_step(file.path()).err().unwrap();
    assert!(matches!(err, Error::SyntaxError { .. }), "got {err}");
}

#[test]
fn test_open_step_reports_load_stats() {
    let file = house_file();
    let (model, stats) = IfcModel::open_step_with_stats(file.path()).unwrap();
    // Only the cartesian point is skipped.
    assert_eq!(stats, LoadStats { entities: 8, relationships: 7, skipped: 1 });
    assert_eq!(model.backend().entity_count().unwrap(), stats.entities);
}

#[test]
fn test_distribution_elements_in_storey() {
    let file = step_file(
        b"ISO-10303-21;
HEADER;FILE_SCHEMA(('IFC4'));ENDSEC;
DATA;
#1=IFCSITE('s',$,$,$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
#2=IFCBUILDINGSTOREY('g',$,$,$,$,$,$,$,.ELEMENT.,0.);
#10=IFCJUNCTIONBOX('j',$,$,$,$,$,$,$,.DATA.);
#11=IFCCOMMUNICATIONSAPPLIANCE('c',$,$,$,$,$,$,$,.ROUTER.);
#12=IFCELECTRICDISTRIBUTIONBOARD('d',$,$,$,$,$,$,$,.DISTRIBUTIONBOARD.);
#20=IFCRELAGGREGATES('a',$,$,$,#1,(#2));
#21=IFCRELCONTAINEDINSPATIALSTRUCTURE('r',$,$,$,(#10,#11,#12),#2);
ENDSEC;
END-ISO-10303-21;
",
    );

    assert_eq!(
        to_dot(&file),
        "strict graph G {\n\
         graph [overlap=false,splines=true,rankdir=LR];\n\
         \"#1=IfcSite\" [color=\"#ff99cc\",style=filled];\n\
         \"#2=IfcBuildingStorey\" [color=\"#ff99cc\",style=filled];\n\
         \"#10=IfcJunctionBox\" [color=\"#9999ff\",style=filled];\n\
         \"#11=IfcCommunicationsAppliance\" [color=\"#9999ff\",style=filled];\n\
         \"#12=IfcElectricDistributionBoard\" [color=\"#9999ff\",style=filled];\n\
         \"#1=IfcSite\"--\"#2=IfcBuildingStorey\" [weight=9,style=solid];\n\
         \"#2=IfcBuildingStorey\"--\"#10=IfcJunctionBox\" [weight=1,style=solid];\n\
         \"#2=IfcBuildingStorey\"--\"#11=IfcCommunicationsAppliance\" [weight=1,style=solid];\n\
         \"#2=IfcBuildingStorey\"--\"#12=IfcElectricDistributionBoard\" [weight=1,style=solid];\n\
         subgraph id_1 {\n\
         cluster=true;\n\
         \"#1=IfcSite\";\n\
         \"#2=IfcBuildingStorey\";\n\
         subgraph id_2 {\n\
         cluster=true;\n\
         \"#2=IfcBuildingStorey\";\n\
         \"#10=IfcJunctionBox\";\n\
         \"#11=IfcCommunicationsAppliance\";\n\
         \"#12=IfcElectricDistributionBoard\";\n\
         }\n\
         }\n\
         }\n"
    );
}

#[test]
fn test_ifc2x3_project_is_an_object() {
    let file = step_file(
        b"ISO-10303-21;
HEADER;FILE_SCHEMA(('IFC2X3'));ENDSEC;
DATA;
#1=IFCPROJECT('p',$,'Project',$,$,$,$,$,$);
#5=IFCSITE('s',$,'Site',$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
#6=IFCELECTRICALELEMENT('e',$,$,$,$,$,$,$);
#20=IFCRELAGGREGATES('r',$,$,$,#1,(#5));
#21=IFCRELCONTAINEDINSPATIALSTRUCTURE('c',$,$,$,(#6),#5);
ENDSEC;
END-ISO-10303-21;
",
    );

    assert_eq!(
        to_dot(&file),
        "strict graph G {\n\
         graph [overlap=false,splines=true,rankdir=LR];\n\
         \"#1=IfcProject\" [color=\"#ff9999\",style=filled];\n\
         \"#5=IfcSite\" [color=\"#ff99cc\",style=filled];\n\
         \"#6=IfcElectricalElement\" [color=\"#9999ff\",style=filled];\n\
         \"#1=IfcProject\"--\"#5=IfcSite\" [weight=9,style=solid];\n\
         \"#5=IfcSite\"--\"#6=IfcElectricalElement\" [weight=1,style=solid];\n\
         subgraph id_5 {\n\
         cluster=true;\n\
         \"#5=IfcSite\";\n\
         \"#6=IfcElectricalElement\";\n\
         }\n\
         }\n"
    );
}

#[test]
fn test_latin1_site_name_is_replaced_not_rejected() {
    let file = step_file(
        b"ISO-10303-21;
HEADER;FILE_SCHEMA(('IFC4'));ENDSEC;
DATA;
#1=IFCSITE('s',$,'Stra\xDFe',$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
ENDSEC;
END-ISO-10303-21;
",
    );

    let (model, stats) = IfcModel::open_step_with_stats(file.path()).unwrap();
    assert_eq!(stats.entities, 1);
    assert_eq!(model.backend().entity(EntityId(1)).unwrap().unwrap().type_name, "IfcSite");
    assert!(to_dot(&file).contains("\"#1=IfcSite\" [color=\"#ff99cc\",style=filled];"));
}

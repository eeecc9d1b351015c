use serde_json::Value;

use super::fixture::E2EFixture;

#[test]
fn test_full_session_persists_between_runs() {
    let fixture = E2EFixture::new();

    let out = fixture.session("1\n1\nAnn\n5\nA\n1\n2\nBo\n6\nB\n6\n");
    assert!(out.contains("=== Student Management CLI App ==="));
    assert_eq!(out.matches("New student added successfully!").count(), 2);
    assert!(out.contains("Exiting program. Goodbye!"));

    let out = fixture.session("2\n4\n2\n\n\nA+\n5\n1\n2\n6\n");
    assert!(out.contains("Student data updated!"));
    assert!(out.contains("Student deleted!"));
    assert!(out.contains(" ID: 2 | Name: Bo | Roll No: 6 | Grade: A+"));

    let doc: Value = serde_json::from_str(&fixture.read("students.json")).unwrap();
    assert_eq!(
        doc,
        serde_json::json!([{"ID": "2", "Name": "Bo", "Roll_no": "6", "Grade": "A+"}])
    );
    assert_eq!(
        fixture.read("students.csv"),
        "ID,Name,Roll_no,Grade\r\n2,Bo,6,A+\r\n"
    );
}

#[test]
fn test_session_reports_errors_and_keeps_going() {
    let fixture = E2EFixture::new();
    let out = fixture.session("9\n3\n42\n7\nmissing.csv\n6\n");

    assert!(out.contains("Invalid choice! Try again."));
    assert!(out.contains("Student not found!"));
    assert!(out.contains("File not found! Please enter a valid path."));
    assert!(out.contains("Exiting program. Goodbye!"));
}

#[test]
fn test_session_ends_cleanly_on_eof() {
    let fixture = E2EFixture::new();
    let out = fixture.session("2\n");
    assert!(out.contains("No student data found."));
    assert!(!fixture.path("students.json").exists());
}

#[test]
fn test_startup_ignores_row_file() {
    let fixture = E2EFixture::new();
    fixture.write("students.csv", "ID,Name,Roll_no,Grade\n1,Ann,5,A\n");

    let out = fixture.session("2\n6\n");
    assert!(out.contains("No student data found."));
}

#[test]
fn test_import_then_extract() {
    let fixture = E2EFixture::new();
    let external = fixture.write("class.csv", "ID,Name,Roll_no,Grade\n7,Cy,8,C\n8,Di,9,D\n");
    let external = external.display().to_string();

    let script = format!("7\n{external}\n8\n{external}\nName,Grade\n2\n6\n");
    let out = fixture.session(&script);

    assert!(out.contains("External CSV file loaded successfully! (2 records)"));
    assert!(out.contains(r#"{"Name":"Cy","Grade":"C"}"#));
    assert!(out.contains(" ID: 8 | Name: Di | Roll No: 9 | Grade: D"));
    assert!(fixture.path("students.json").exists());
}

use std::path::Path;

use crate::error::DatasetError;
use crate::models::SurveyRecord;

/// The survey responses collected for the dashboard, in collection order.
pub fn embedded() -> Vec<SurveyRecord> {
    // One response per line, in the column order of the survey export.
    #[rustfmt::skip]
    let rows: [(&str, &str, &str, &str, &str, &str); 29] = [
        ("University of Richmond", "Political Science and History", "An Empty Classroom", "History", "3-4 hours", "No"),
        ("University of Richmond", "Art History major, journalism minor", "The Library", "History", "3-4 hours", "Depends"),
        ("University of Richmond", "Psychology", "The Library", "Philosophy / History", "3-4 hours", "No"),
        ("University of Richmond", "Undecided", "The Library", "Italian", "3-4 hours", "Depends"),
        ("University of Richmond", "Political Science and History", "The Library", "History and political science", "3-4 hours", "No"),
        ("University of Richmond", "Geography", "The Library", "Calculus II", "1-2 hours", "No"),
        ("University of Richmond", "N/A", "The Library", "Chemistry", "3-4 hours", "Depends"),
        ("University of Richmond", "International Business", "The Library", "Dsst 289 Intro to Data Science", "1-2 hours", "Depends"),
        ("University of Richmond", "Business Analytics with a Concentration in Marketing", "University of Richmond Well-Being Center", "Major classes", "1-2 hours", "No"),
        ("University of Richmond", "Business Administration with a Concentration in Marketing", "University of Richmond Well-Being Center", "Major classes", "1-2 hours", "No"),
        ("University of Richmond", "Business", "An Empty Classroom", "Accounting", "5+ hours", "No"),
        ("University of Richmond", "Biochemistry", "Dorm", "Leadership studies and social sciences", "1-2 hours", "Yes"),
        ("University of Richmond", "Intended Health Studies", "An Empty Classroom", "Chemistry", "1-2 hours", "Yes"),
        ("University of Richmond", "PPEL, Business Admin", "The Library", "Microeconomics", "1-2 hours", "Yes"),
        ("University of Virginia", "Systems Engineering w/ sustainability", "The Library", "Math", "3-4 hours", "No"),
        ("University of Virginia", "Commerce, minor in statistics", "The Library", "Accounting", "3-4 hours", "No"),
        ("University of Virginia", "Political Science", "The Library", "Law", "5+ hours", "Yes"),
        ("University of Virginia", "Biology and Environmental Science Major, American Sign Language Minor", "Dorm", "Biology", "3-4 hours", "No"),
        ("University of Virginia", "Nursing", "Coffee Shop", "Pharmacology", "3-4 hours", "No"),
        ("Franklin and Marshall", "Economics+Public Policy", "Dorm", "Mathematics", "1-2 hours", "Yes"),
        ("Franklin and Marshall", "Business", "The Library", "N/A", "1-2 hours", "Depends"),
        ("Franklin and Marshall", "Physics + Math", "College Union", "Physics", "3-4 hours", "No"),
        ("Gettysburg College", "Chemistry and Health Sciences", "Empty Classroom", "Biochemistry", "3-4 hours", "depends"),
        ("Franklin and Marshall", "Psychology", "The Library", "Government", "1-2 hours", "No"),
        ("Franklin and Marshall", "Government + History", "The Library", "Lab", "1-2 hours", "No"),
        ("Franklin and Marshall", "English", "The Library", "English", "1-2 hours", "Depends"),
        ("Franklin and Marshall", "English", "The Library", "English", "1-2 hours", "yes"),
        ("Franklin and Marshall", "Business", "Dorm", "Psychology", "1-2 hours", "no"),
        ("Franklin and Marshall", "English for Journalism", "An Empty Classroom", "Business", "3-4 hours", "no"),
    ];

    rows.iter()
        .map(|(college, major, location, subject, hours, stress)| {
            SurveyRecord::new(college, major, location, subject, hours, stress)
        })
        .collect()
}

/// Read survey responses from a CSV file with the header
/// `college,major,studyLocation,subject,studyHours,financialStress`.
pub fn load_csv(csv_path: &Path) -> Result<Vec<SurveyRecord>, DatasetError> {
    let file = std::fs::File::open(csv_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize::<SurveyRecord>() {
        records.push(result?);
    }

    Ok(records)
}

/// Embedded responses unless a CSV path is supplied.
pub fn load(csv_path: Option<&Path>) -> Result<Vec<SurveyRecord>, DatasetError> {
    match csv_path {
        Some(path) => {
            let records = load_csv(path)?;
            log::info!("Loaded {} survey records from {}", records.len(), path.display());
            Ok(records)
        }
        None => {
            let records = embedded();
            log::info!("Using {} embedded survey records", records.len());
            Ok(records)
        }
    }
}

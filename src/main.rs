//! Interactive menu over the clinic store
//!
//! Loads the credential and patient files named on the command line,
//! authenticates one user, and drives the store through that user's
//! role-gated actions. All rendering lives here; the library returns
//! structured values only.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use chrono::NaiveDate;
use log::info;

use clinic_store::algorithm::statistics::{self, DemographicAttribute};
use clinic_store::auth::authenticate;
use clinic_store::collections::{PatientCollection, PatientInfo, RemoveOutcome, RetrieveOutcome};
use clinic_store::error::Result;
use clinic_store::loader;
use clinic_store::models::{Patient, Role, Visit};
use clinic_store::registry::DATE_FORMAT;
use clinic_store::utils::ids::generate_visit_id;

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: clinic-store <credential_file> <patient_file>");
        return ExitCode::FAILURE;
    }

    match run(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(credential_path: &Path, patient_path: &Path) -> Result<()> {
    let users = loader::read_user_credentials(credential_path)?;
    let mut hospital = loader::read_patient_records(patient_path)?;

    let username = prompt("Enter username: ")?;
    let password = prompt("Enter password: ")?;

    let Some(user) = authenticate(&users, &username, &password) else {
        println!("Invalid username or password.");
        return Ok(());
    };
    println!("Login successful!");
    info!("user {} logged in as {:?}", user.username, user.role);

    match &user.role {
        Role::Management => statistics_menu(&hospital)?,
        Role::Admin => visit_count_prompt(&hospital)?,
        Role::Nurse | Role::Clinician => record_loop(&mut hospital)?,
        Role::Other(role) => println!("No actions available for role `{role}`."),
    }
    Ok(())
}

/// Print a message and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn statistics_menu(hospital: &PatientCollection) -> Result<()> {
    println!("Select statistics to generate:");
    println!("1. Patient count by insurance type");
    println!("2. Patient count by demographics groups (age, race, gender, ethnicity)");
    println!("3. Visit count by department");
    let choice = prompt("Enter your choice (1/2/3): ")?;
    match choice.as_str() {
        "1" => print_counts(
            "Patient count by insurance:",
            &statistics::count_by_insurance(hospital),
        ),
        "2" => {
            for attribute in DemographicAttribute::ALL {
                print_counts(
                    &format!("Patient count by {}:", attribute.name()),
                    &statistics::count_by_demographics(hospital, attribute),
                );
            }
        }
        "3" => print_counts(
            "Visit count by department:",
            &statistics::count_by_department(hospital),
        ),
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn print_counts(title: &str, counts: &[(String, usize)]) {
    println!("{title}");
    for (value, count) in counts {
        println!("{value}: {count}");
    }
}

fn visit_count_prompt(hospital: &PatientCollection) -> Result<()> {
    let raw = prompt("Enter date (YYYY-MM-DD): ")?;
    match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
        Ok(date) => println!(
            "Total visits on {date}: {}",
            hospital.count_visits_on_date(date)
        ),
        Err(_) => println!("Invalid date format."),
    }
    Ok(())
}

fn record_loop(hospital: &mut PatientCollection) -> Result<()> {
    loop {
        let action = prompt(
            "Choose an action (add_patient, remove_patient, retrieve_patient, count_visits, stop): ",
        )?;
        match action.to_lowercase().as_str() {
            "stop" => break,
            "add_patient" => add_patient(hospital)?,
            "remove_patient" => {
                let patient_id = prompt("Enter Patient_ID: ")?;
                match hospital.remove_patient(&patient_id) {
                    RemoveOutcome::Removed => {
                        println!("Patient and associated records removed successfully.");
                    }
                    RemoveOutcome::NotFound => println!("Patient not found."),
                }
            }
            "retrieve_patient" => retrieve_patient(hospital)?,
            "count_visits" => visit_count_prompt(hospital)?,
            _ => println!("Invalid action."),
        }
    }
    Ok(())
}

/// Add a patient, or a visit when the id already exists
fn add_patient(hospital: &mut PatientCollection) -> Result<()> {
    let patient_id = prompt("Enter Patient_ID: ")?;
    if hospital.contains(&patient_id) {
        let raw = prompt("Enter Visit_time (YYYY-MM-DD): ")?;
        let Ok(visit_time) = NaiveDate::parse_from_str(&raw, DATE_FORMAT) else {
            println!("Invalid date format.");
            return Ok(());
        };
        let department = prompt("Enter Visit_department: ")?;
        let chief_complaint = prompt("Enter Chief_complaint: ")?;

        let Some(patient) = hospital.get(&patient_id) else {
            return Ok(());
        };
        let visit_id = generate_visit_id(patient)?;
        if let Some(patient) = hospital.get_mut(&patient_id) {
            patient.add_visit(Visit::new(visit_id, visit_time, department, chief_complaint));
            println!("Visit added successfully.");
        }
    } else {
        let gender = prompt("Enter Gender: ")?;
        let race = prompt("Enter Race: ")?;
        let raw_age = prompt("Enter Age: ")?;
        let Ok(age) = raw_age.parse::<u32>() else {
            println!("Invalid age.");
            return Ok(());
        };
        let ethnicity = prompt("Enter Ethnicity: ")?;
        let insurance = prompt("Enter Insurance: ")?;
        let zip_code = prompt("Enter Zip code: ")?;
        hospital.add_patient(Patient::new(
            patient_id, gender, race, age, ethnicity, insurance, zip_code,
        ));
        println!("Patient added successfully.");
    }
    Ok(())
}

fn retrieve_patient(hospital: &PatientCollection) -> Result<()> {
    let patient_id = prompt("Enter Patient_ID: ")?;
    if !hospital.contains(&patient_id) {
        println!("Patient not found.");
        return Ok(());
    }
    println!("Patient information for ID: {patient_id}");
    let field = prompt(
        "Enter the information needed ('all' to display all information, or specify: gender, race, age, ethnicity, insurance, zip_code, visits): ",
    )?;
    match hospital.retrieve_patient(&patient_id, &field) {
        RetrieveOutcome::Info(info) => print_info(&info),
        RetrieveOutcome::InvalidField => println!("Invalid information requested."),
        RetrieveOutcome::NotFound => println!("Patient not found."),
    }
    Ok(())
}

fn print_info(info: &PatientInfo<'_>) {
    match info {
        PatientInfo::Gender(value) => println!("Gender: {value}"),
        PatientInfo::Race(value) => println!("Race: {value}"),
        PatientInfo::Age(value) => println!("Age: {value}"),
        PatientInfo::Ethnicity(value) => println!("Ethnicity: {value}"),
        PatientInfo::Insurance(value) => println!("Insurance: {value}"),
        PatientInfo::ZipCode(value) => println!("Zip code: {value}"),
        PatientInfo::Visits(visits) => print_visits(visits),
        PatientInfo::All(patient) => {
            println!("Gender: {}", patient.gender);
            println!("Race: {}", patient.race);
            println!("Age: {}", patient.age);
            println!("Ethnicity: {}", patient.ethnicity);
            println!("Insurance: {}", patient.insurance);
            println!("Zip code: {}", patient.zip_code);
            print_visits(&patient.visits);
        }
    }
}

fn print_visits(visits: &[Visit]) {
    println!("Visits:");
    for visit in visits {
        println!("Visit ID: {}", visit.visit_id);
        println!("Visit time: {}", visit.visit_time);
        println!("Department: {}", visit.department);
        println!("Chief complaint: {}", visit.chief_complaint);
    }
}

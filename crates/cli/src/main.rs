use clap::{Parser, Subcommand};
use clinicals_core::config::{database_url_from_env_value, max_connections_from_env_value};
use clinicals_core::{
    pb, ClinicalDataRepository, CoreConfig, CoreError, Database, PatientRepository, Repository,
};

#[derive(Parser)]
#[command(name = "clinicals")]
#[command(about = "Clinicals patient and measurement store CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// List all patients
    ListPatients,
    /// Add a patient
    AddPatient {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Age in years
        age: i32,
    },
    /// List all clinical data
    ListClinicalData,
    /// Record a measurement for an existing patient
    Record {
        /// Patient identifier
        patient_id: i32,
        /// Component name, e.g. "HR"
        component_name: String,
        /// Component value, e.g. "72"
        component_value: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("Use 'clinicals --help' for commands");
        return Ok(());
    };

    let cfg = CoreConfig::new(
        database_url_from_env_value(std::env::var("DATABASE_URL").ok()),
        max_connections_from_env_value(std::env::var("CLINICALS_DB_MAX_CONNECTIONS").ok())?,
    )?;
    let db = Database::connect(&cfg).await?;
    let patients = PatientRepository::new(db.pool().clone());
    let clinical_data = ClinicalDataRepository::new(db.pool().clone());

    match command {
        Commands::Migrate => match db.run_migrations().await {
            Ok(()) => println!("Migrations applied to {}", cfg.database_url()),
            Err(e) => eprintln!("Error applying migrations: {}", e),
        },
        Commands::ListPatients => {
            let all = patients.find_all().await?;
            if all.is_empty() {
                println!("No patients found.");
            } else {
                for patient in all {
                    println!(
                        "ID: {}, Name: {} {}, Age: {}",
                        patient.id, patient.first_name, patient.last_name, patient.age
                    );
                }
            }
        }
        Commands::AddPatient {
            first_name,
            last_name,
            age,
        } => {
            let req = pb::PatientReq {
                first_name,
                last_name,
                age,
            };
            match patients.insert(req).await {
                Ok(patient) => println!("Added patient with ID: {}", patient.id),
                Err(e) => eprintln!("Error adding patient: {}", e),
            }
        }
        Commands::ListClinicalData => {
            let all = clinical_data.find_all().await?;
            if all.is_empty() {
                println!("No clinical data found.");
            } else {
                for record in all {
                    let measured = record
                        .measured_date_time
                        .map(|t| t.to_rfc3339())
                        .unwrap_or_else(|| "-".into());
                    println!(
                        "ID: {}, Patient: {}, {} = {}, Measured: {}",
                        record.id,
                        record.patient_id,
                        record.component_name,
                        record.component_value,
                        measured
                    );
                }
            }
        }
        Commands::Record {
            patient_id,
            component_name,
            component_value,
        } => {
            let result = match patients.find_by_id(patient_id).await {
                Ok(Some(patient)) => {
                    clinical_data
                        .insert(pb::CreateClinicalDataReq {
                            component_name,
                            component_value,
                            measured_date_time: None,
                            patient_id: patient.id,
                        })
                        .await
                }
                Ok(None) => Err(CoreError::PatientNotFound(patient_id)),
                Err(e) => Err(e),
            };
            match result {
                Ok(record) => println!(
                    "Recorded clinical data with ID: {} for patient {}",
                    record.id, record.patient_id
                ),
                Err(e) => eprintln!("Error recording clinical data: {}", e),
            }
        }
    }

    Ok(())
}

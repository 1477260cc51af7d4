use jiff::civil::date;

use medconnect_core::keys;
use medconnect_core::models::appointment::{AppointmentRequest, AppointmentStatus};
use medconnect_core::models::doctor::{BOOKING_PLACEHOLDER_PHOTO, Doctor, PROFILE_PLACEHOLDER_PHOTO};
use medconnect_core::validation::{AppointmentForm, validate_form};

#[test]
fn doctor_list_parses_static_json_shape() {
    let json = r#"[
        {"id": "d1", "name": "Dr. A", "specialization": "Cardiology", "branch": "Main",
         "qualifications": "MBBS, MD", "availability": "Mon-Fri", "photoURL": "https://x/a.jpg"},
        {"id": "d2", "name": "Dr. B", "specialization": "Neurology", "branch": "North"}
    ]"#;
    let doctors: Vec<Doctor> = serde_json::from_str(json).unwrap();

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].photo_url.as_deref(), Some("https://x/a.jpg"));
    assert_eq!(doctors[0].photo_or(PROFILE_PLACEHOLDER_PHOTO), "https://x/a.jpg");
    assert_eq!(doctors[1].qualifications, "");
    assert_eq!(doctors[1].photo_or(PROFILE_PLACEHOLDER_PHOTO), PROFILE_PLACEHOLDER_PHOTO);
    assert_eq!(doctors[1].photo_or(BOOKING_PLACEHOLDER_PHOTO), BOOKING_PLACEHOLDER_PHOTO);
}

#[test]
fn doctor_document_without_id_still_parses() {
    let json = r#"{"name": "Dr. A", "specialization": "Cardiology", "branch": "Main"}"#;
    let doctor: Doctor = serde_json::from_str(json).unwrap();

    assert_eq!(doctor.id, "");
    assert_eq!(doctor.name, "Dr. A");
    assert_eq!(doctor.availability, "");
}

#[test]
fn request_copies_doctor_and_trims_text() {
    let doctor = Doctor {
        id: "d1".to_string(),
        name: "Dr. A".to_string(),
        specialization: "Cardiology".to_string(),
        branch: "Main".to_string(),
        qualifications: String::new(),
        availability: String::new(),
        photo_url: None,
    };
    let form = AppointmentForm {
        patient_name: "  Jane Doe ".to_string(),
        contact_number: " 123-456-7890 ".to_string(),
        email: "jane@example.com".to_string(),
        preferred_date: "2026-10-21".to_string(),
        preferred_time: "10:00".to_string(),
        notes: "  bring scans\n".to_string(),
    };
    let validated = validate_form(&form, date(2026, 10, 19)).unwrap();
    let request = AppointmentRequest::new(&doctor, &validated);

    assert_eq!(request.doctor_id, "d1");
    assert_eq!(request.doctor_name, "Dr. A");
    assert_eq!(request.doctor_specialization, "Cardiology");
    assert_eq!(request.doctor_branch, "Main");
    assert_eq!(request.patient_name, "Jane Doe");
    assert_eq!(request.contact_number, "123-456-7890");
    assert_eq!(request.notes, "bring scans");
    assert_eq!(request.status, AppointmentStatus::Pending);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["status"], "pending");
    assert_eq!(json["doctorSpecialization"], "Cardiology");
    assert_eq!(json["preferredDate"], "2026-10-21");
}

#[test]
fn doctor_keys_reject_path_segments() {
    assert_eq!(keys::doctor("d1").as_deref(), Some("doctors/d1.json"));
    assert_eq!(keys::doctor(""), None);
    assert_eq!(keys::doctor("../admin"), None);
    assert_eq!(keys::doctor("a/b"), None);
}

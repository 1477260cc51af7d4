use jiff::civil::date;

use medconnect_core::models::appointment::{AppointmentRequest, AppointmentStatus};
use medconnect_storage::store::stamp_appointment;

fn request() -> AppointmentRequest {
    AppointmentRequest {
        doctor_id: "d1".to_string(),
        doctor_name: "Dr. A".to_string(),
        doctor_specialization: "Cardiology".to_string(),
        doctor_branch: "Main".to_string(),
        patient_name: "Jane Doe".to_string(),
        contact_number: "+14155551234".to_string(),
        email: "jane@example.com".to_string(),
        preferred_date: date(2026, 10, 21),
        preferred_time: "09:30".to_string(),
        notes: String::new(),
        status: AppointmentStatus::Pending,
    }
}

#[test]
fn stamped_records_get_distinct_ids_and_a_timestamp() {
    let before = jiff::Timestamp::now();
    let a = stamp_appointment(request());
    let b = stamp_appointment(request());

    assert_ne!(a.id, b.id);
    assert!(a.booked_at >= before);
    assert_eq!(a.request, request());
}

#[test]
fn stored_record_flattens_request_fields() {
    let record = stamp_appointment(request());
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["id"], record.id.to_string());
    assert!(json["bookedAt"].is_string());
    assert_eq!(json["doctorId"], "d1");
    assert_eq!(json["status"], "pending");
    assert!(json.get("request").is_none());
}

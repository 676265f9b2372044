//! Built-in demo dataset.

/// Snapshot loaded by [`Registry::builtin`](super::Registry::builtin).
pub const BUILTIN_SNAPSHOT: &str = r#"
{
  "medicines": [
    {
      "id": "1",
      "name": "Paracetamol 500mg",
      "batch_number": "PCT2024001",
      "qr_code": "QR-PCT2024001",
      "manufacturer": "Quality Pharma Ltd",
      "expiry_date": "2026-12-31",
      "dosage_instructions": "Take 1-2 tablets every 6 hours",
      "is_authentic": true,
      "side_effects": ["Nausea", "Skin rash (rare)"],
      "price": "UGX 2,000"
    },
    {
      "id": "2",
      "name": "Amoxicillin 250mg",
      "batch_number": "AMX2024002",
      "qr_code": "QR-AMX2024002",
      "manufacturer": "MediCare Uganda",
      "expiry_date": "2027-03-15",
      "dosage_instructions": "Take 1 capsule 3 times daily",
      "is_authentic": true,
      "side_effects": ["Diarrhea", "Stomach upset", "Allergic reactions"],
      "price": "UGX 15,000"
    },
    {
      "id": "3",
      "name": "Artemether-Lumefantrine",
      "batch_number": "ALU2024003",
      "qr_code": "QR-ALU2024003",
      "manufacturer": "Uganda Pharma",
      "expiry_date": "2026-08-20",
      "dosage_instructions": "Take 4 tablets initially, then 4 tablets after 8, 24, 36, 48 and 60 hours",
      "is_authentic": true,
      "side_effects": ["Headache", "Dizziness", "Loss of appetite"],
      "price": "UGX 12,000"
    },
    {
      "id": "4",
      "name": "Ciprofloxacin 500mg",
      "batch_number": "CIP2024004",
      "qr_code": "QR-CIP2024004",
      "manufacturer": "East African Meds",
      "expiry_date": "2027-01-10",
      "dosage_instructions": "Take 1 tablet twice daily",
      "is_authentic": true,
      "side_effects": ["Nausea", "Tendon pain", "Sun sensitivity"],
      "price": "UGX 18,000"
    },
    {
      "id": "5",
      "name": "Fake Paracetamol",
      "batch_number": "FAKE001",
      "qr_code": "QR-FAKE001",
      "manufacturer": "Unknown Source",
      "expiry_date": "2025-06-30",
      "dosage_instructions": "Unknown",
      "is_authentic": false,
      "side_effects": ["Potentially dangerous - DO NOT USE"],
      "price": "N/A"
    },
    {
      "id": "6",
      "name": "Metformin 500mg",
      "batch_number": "MET2024006",
      "qr_code": "QR-MET2024006",
      "manufacturer": "Quality Pharma Ltd",
      "expiry_date": "2026-11-25",
      "dosage_instructions": "Take 1 tablet twice daily with meals",
      "is_authentic": true,
      "side_effects": ["Stomach upset", "Diarrhea", "Metallic taste"],
      "price": "UGX 8,000"
    },
    {
      "id": "7",
      "name": "Diclofenac 50mg",
      "batch_number": "DIC2024007",
      "qr_code": "QR-DIC2024007",
      "manufacturer": "MediCare Uganda",
      "expiry_date": "2026-02-14",
      "dosage_instructions": "Take 1 tablet 2-3 times daily after meals",
      "is_authentic": true,
      "side_effects": ["Stomach pain", "Heartburn", "Dizziness"],
      "price": "UGX 5,000"
    },
    {
      "id": "8",
      "name": "Omeprazole 20mg",
      "batch_number": "OME2024008",
      "qr_code": "QR-OME2024008",
      "manufacturer": "Uganda Pharma",
      "expiry_date": "2027-05-30",
      "dosage_instructions": "Take 1 capsule once daily before breakfast",
      "is_authentic": true,
      "side_effects": ["Headache", "Diarrhea", "Abdominal pain"],
      "price": "UGX 10,000"
    },
    {
      "id": "9",
      "name": "Ibuprofen 400mg",
      "batch_number": "IBU2024009",
      "qr_code": "QR-IBU2024009",
      "manufacturer": "East African Meds",
      "expiry_date": "2026-09-18",
      "dosage_instructions": "Take 1 tablet every 6-8 hours with food",
      "is_authentic": true,
      "side_effects": ["Nausea", "Heartburn", "Dizziness"],
      "price": "UGX 3,500"
    },
    {
      "id": "10",
      "name": "Fake Antimalarial",
      "batch_number": "FAKE002",
      "qr_code": "QR-FAKE002",
      "manufacturer": "Suspicious Supplier",
      "expiry_date": "2024-12-01",
      "dosage_instructions": "Unknown",
      "is_authentic": false,
      "side_effects": ["Life-threatening - DO NOT USE"],
      "price": "N/A"
    }
  ],
  "pharmacies": [
    {
      "id": "1",
      "name": "Care Pharmacy",
      "location": "Kampala Central, Kampala Road",
      "verified": true,
      "license_code": "NDA-KLA-2024-001",
      "phone": "+256 700 123 456"
    },
    {
      "id": "2",
      "name": "HealthPlus Pharmacy",
      "location": "Entebbe, Victoria Mall",
      "verified": true,
      "license_code": "NDA-ENT-2024-002",
      "phone": "+256 700 234 567"
    },
    {
      "id": "3",
      "name": "Community Drug Shop",
      "location": "Jinja, Main Street",
      "verified": true,
      "license_code": "NDA-JIN-2024-003",
      "phone": "+256 700 345 678"
    },
    {
      "id": "4",
      "name": "Quick Meds",
      "location": "Mbarara, High Street",
      "verified": false,
      "license_code": "UNVERIFIED",
      "phone": "+256 700 456 789"
    },
    {
      "id": "5",
      "name": "Wellness Pharmacy",
      "location": "Gulu, Shopping Center",
      "verified": true,
      "license_code": "NDA-GUL-2024-005",
      "phone": "+256 700 567 890"
    },
    {
      "id": "6",
      "name": "Discount Drugs",
      "location": "Kampala, Wandegeya",
      "verified": false,
      "license_code": "EXPIRED",
      "phone": "+256 700 678 901"
    },
    {
      "id": "7",
      "name": "MediCare Center",
      "location": "Fort Portal, Market Street",
      "verified": true,
      "license_code": "NDA-FTP-2024-007",
      "phone": "+256 700 789 012"
    },
    {
      "id": "8",
      "name": "Trusted Pharmacy",
      "location": "Mbale, Republic Street",
      "verified": true,
      "license_code": "NDA-MBA-2024-008",
      "phone": "+256 700 890 123"
    }
  ]
}
"#;

/// Sample batch numbers offered on the batch entry screen.
pub const SUGGESTED_BATCHES: [&str; 5] = [
    "PCT2024001",
    "AMX2024002",
    "ALU2024003",
    "CIP2024004",
    "FAKE001",
];

/// QR values the demo scanner can "read".
pub const DEMO_QR_CODES: [&str; 4] = [
    "QR-PCT2024001",
    "QR-AMX2024002",
    "QR-ALU2024003",
    "QR-FAKE001",
];

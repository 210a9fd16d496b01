//! Built-in curricula: course number → Holland letters.
//!
//! Lecture and laboratory sections are separate graded entries, so they are
//! listed separately. Row order is the canonical transcript order for the
//! program. General-education courses shared by both programs carry the same
//! tags in each table.

pub struct ProgramTable {
    pub name: &'static str,
    pub courses: &'static [(&'static str, &'static str)],
}

/// Program A: BS Information Technology.
pub const PROGRAM_IT: ProgramTable = ProgramTable {
    name: "BSIT",
    courses: &[
        // 1st year, 1st semester
        ("ICC 0101", "IC"),
        ("ICC 0101.1", "RI"),
        ("ICC 0102", "IC"),
        ("ICC 0102.1", "RI"),
        ("IPP 0010", "AS"),
        ("MMW 0001", "IC"),
        ("PCM 0006", "SE"),
        ("STS 0002", "IS"),
        ("AAP 0007", "A"),
        ("PED 0001", "RS"),
        ("NSTP 01", "S"),
        // 1st year, 2nd semester
        ("CET 0111", "I"),
        ("CET 0114", "I"),
        ("CET 0114.1", "RI"),
        ("EIT 0121", "AS"),
        ("EIT 0121.1A", "RA"),
        ("EIT 0122", "IC"),
        ("EIT 0123", "AI"),
        ("EIT 0123.1", "RA"),
        ("GTB 121", "AS"),
        ("ICC 0103", "IC"),
        ("ICC 0103.1", "RI"),
        ("PED 0013", "AS"),
        ("NSTP 02", "S"),
        // 2nd year, 1st semester
        ("CET 0121", "I"),
        ("CET 0225", "RI"),
        ("CET 0225.1", "RI"),
        ("EIT 0211", "IC"),
        ("EIT 0211.1A", "RI"),
        ("EIT ELECTIVE 1", "IA"),
        ("ICC 0104", "IC"),
        ("ICC 0104.1", "RI"),
        ("PPC 122", "AS"),
        ("TCW 0005", "SE"),
        ("PED 0054", "RS"),
        // 2nd year, 2nd semester
        ("EIT 0212", "RC"),
        ("EIT 0221", "IC"),
        ("EIT 0222", "RI"),
        ("EIT 0222.1", "R"),
        ("EIT ELECTIVE 2", "IA"),
        ("GES 0013", "IS"),
        ("ICC 0105", "CI"),
        ("ICC 0105.1", "CR"),
        ("RPH 0004", "S"),
        ("UTS 0003", "S"),
        ("PED 0074", "RS"),
        // 3rd year, 1st semester
        ("EIT 0311", "CI"),
        ("EIT 0311.1", "CR"),
        ("EIT 0312", "RI"),
        ("EIT 0312.1", "R"),
        ("EIT ELECTIVE 3", "EA"),
        ("ICC 0335", "EI"),
        ("ICC 0335.1", "ER"),
        ("LWR 0009", "S"),
        // 3rd year, 2nd semester
        ("EIT 0321", "IC"),
        ("EIT 0321.1", "RC"),
        ("EIT 0322", "RC"),
        ("EIT 0322.1", "RC"),
        ("EIT 0323", "IR"),
        ("EIT 0323.1", "R"),
        ("ETH 0008", "SE"),
        // mid-year term
        ("CAP 0101", "IES"),
        ("EIT 0331", "RC"),
        ("EIT 0331.1", "RC"),
        // 4th year
        ("CAP 0102", "IES"),
        ("EIT ELECTIVE 4", "EC"),
        ("EIT ELECTIVE 5", "EA"),
        ("EIT ELECTIVE 6", "ES"),
        ("IIP 0101", "SE"),
        ("IIP 0101.1", "RSE"),
    ],
};

/// Program B: BS Computer Science.
pub const PROGRAM_CS: ProgramTable = ProgramTable {
    name: "BSCS",
    courses: &[
        // 1st year, 1st semester
        ("ICC 0101", "IC"),
        ("ICC 0101.1", "RI"),
        ("ICC 0102", "IC"),
        ("ICC 0102.1", "RI"),
        ("MMW 0001", "IC"),
        ("PCM 0006", "SE"),
        ("STS 0002", "IS"),
        ("AAP 0007", "A"),
        ("PED 0001", "RS"),
        ("NSTP 01", "S"),
        // 1st year, 2nd semester
        ("CET 0111", "I"),
        ("CSC 0102", "I"),
        ("ICC 0103", "IC"),
        ("ICC 0103.1", "RI"),
        ("IPP 0010", "AS"),
        ("GTB 121", "AS"),
        ("PED 0013", "AS"),
        ("NSTP 02", "S"),
        // 2nd year, 1st semester
        ("CET 0121", "I"),
        ("CSC 0211", "I"),
        ("CSC 0212", "IC"),
        ("CSC 0212.1", "RI"),
        ("CSC 0213", "RI"),
        ("CSC 0213.1", "R"),
        ("ICC 0104", "IC"),
        ("ICC 0104.1", "RI"),
        ("TCW 0005", "SE"),
        ("PED 0054", "RS"),
        // 2nd year, 2nd semester
        ("CSC 0221", "I"),
        ("CSC 0222", "RI"),
        ("CSC 0223", "AS"),
        ("CSC 0224", "IE"),
        ("ICC 0105", "CI"),
        ("ICC 0105.1", "CR"),
        ("RPH 0004", "S"),
        ("UTS 0003", "S"),
        ("PED 0074", "RS"),
        // 3rd year, 1st semester
        ("CSC 0311", "I"),
        ("CSC 0312", "IEC"),
        ("CSC 0313", "RI"),
        ("CSC 0313.1", "R"),
        ("CSC 0314", "IC"),
        ("CSC ELECTIVE 1", "IA"),
        ("GES 0013", "IS"),
        ("LWR 0009", "S"),
        // 3rd year, 2nd semester
        ("CSC 0321", "EC"),
        ("CSC 0322", "I"),
        ("CSC 0323", "IC"),
        ("CSC 0324", "RI"),
        ("CSC 0325", "IA"),
        ("CSC ELECTIVE 2", "IA"),
        ("ICC 0335", "EI"),
        ("ICC 0335.1", "ER"),
        ("ETH 0008", "SE"),
        // mid-year term
        ("CSP 0101", "SE"),
        ("CSP 0101.1", "RSE"),
        // 4th year
        ("CSC 0411", "IS"),
        ("CSC 0412", "SE"),
        ("CSC ELECTIVE 3", "IE"),
        ("CSC 0421", "IA"),
        ("CSC 0422", "IC"),
    ],
};

pub const BUILTIN_PROGRAMS: [ProgramTable; 2] = [PROGRAM_IT, PROGRAM_CS];

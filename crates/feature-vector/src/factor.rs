//! Assessment Factor Catalog
//!
//! The 20 rated factors in their canonical model order. The order is
//! semantically meaningful: position i of every feature vector corresponds to
//! `Factor::ALL[i]`, and the fitted model artifacts were produced against
//! exactly this ordering. All consumers derive ordering from this catalog.

use serde::{Deserialize, Serialize};

/// Number of factors in the assessment
pub const FACTOR_COUNT: usize = 20;

/// Minimum rating per factor
pub const VALUE_MIN: i64 = 0;

/// Maximum rating per factor
pub const VALUE_MAX: i64 = 30;

/// Default rating when the user has not moved a slider
pub const VALUE_DEFAULT: i64 = 5;

/// Factor grouping used by the evaluation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorGroup {
    /// Psychological and physiological factors
    Psychological,
    /// Academic and environmental factors
    AcademicEnvironmental,
}

/// A rated assessment factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    AnxietyLevel,
    SelfEsteem,
    MentalHealthHistory,
    Depression,
    Headache,
    BloodPressure,
    SleepQuality,
    BreathingProblem,
    SocialSupport,
    PeerPressure,
    NoiseLevel,
    LivingConditions,
    Safety,
    BasicNeeds,
    AcademicPerformance,
    StudyLoad,
    TeacherStudentRelationship,
    FutureCareerConcerns,
    ExtracurricularActivities,
    Bullying,
}

impl Factor {
    /// All factors in canonical model order: psychological block first,
    /// then academic and environmental, each in form order.
    pub const ALL: [Factor; FACTOR_COUNT] = [
        Factor::AnxietyLevel,
        Factor::SelfEsteem,
        Factor::MentalHealthHistory,
        Factor::Depression,
        Factor::Headache,
        Factor::BloodPressure,
        Factor::SleepQuality,
        Factor::BreathingProblem,
        Factor::SocialSupport,
        Factor::PeerPressure,
        Factor::NoiseLevel,
        Factor::LivingConditions,
        Factor::Safety,
        Factor::BasicNeeds,
        Factor::AcademicPerformance,
        Factor::StudyLoad,
        Factor::TeacherStudentRelationship,
        Factor::FutureCareerConcerns,
        Factor::ExtracurricularActivities,
        Factor::Bullying,
    ];

    /// Wire key used in request bodies and model artifacts
    pub fn key(&self) -> &'static str {
        match self {
            Factor::AnxietyLevel => "anxiety_level",
            Factor::SelfEsteem => "self_esteem",
            Factor::MentalHealthHistory => "mental_health_history",
            Factor::Depression => "depression",
            Factor::Headache => "headache",
            Factor::BloodPressure => "blood_pressure",
            Factor::SleepQuality => "sleep_quality",
            Factor::BreathingProblem => "breathing_problem",
            Factor::SocialSupport => "social_support",
            Factor::PeerPressure => "peer_pressure",
            Factor::NoiseLevel => "noise_level",
            Factor::LivingConditions => "living_conditions",
            Factor::Safety => "safety",
            Factor::BasicNeeds => "basic_needs",
            Factor::AcademicPerformance => "academic_performance",
            Factor::StudyLoad => "study_load",
            Factor::TeacherStudentRelationship => "teacher_student_relationship",
            Factor::FutureCareerConcerns => "future_career_concerns",
            Factor::ExtracurricularActivities => "extracurricular_activities",
            Factor::Bullying => "bullying",
        }
    }

    /// Human-readable name for form rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            Factor::AnxietyLevel => "Anxiety Level",
            Factor::SelfEsteem => "Self Esteem",
            Factor::MentalHealthHistory => "Mental Health History",
            Factor::Depression => "Depression",
            Factor::Headache => "Headache",
            Factor::BloodPressure => "Blood Pressure",
            Factor::SleepQuality => "Sleep Quality",
            Factor::BreathingProblem => "Breathing Problem",
            Factor::SocialSupport => "Social Support",
            Factor::PeerPressure => "Peer Pressure",
            Factor::NoiseLevel => "Noise Level",
            Factor::LivingConditions => "Living Conditions",
            Factor::Safety => "Safety",
            Factor::BasicNeeds => "Basic Needs",
            Factor::AcademicPerformance => "Academic Performance",
            Factor::StudyLoad => "Study Load",
            Factor::TeacherStudentRelationship => "Teacher Student Relationship",
            Factor::FutureCareerConcerns => "Future Career Concerns",
            Factor::ExtracurricularActivities => "Extracurricular Activities",
            Factor::Bullying => "Bullying",
        }
    }

    /// Group the factor belongs to on the evaluation form
    pub fn group(&self) -> FactorGroup {
        match self {
            Factor::AnxietyLevel
            | Factor::SelfEsteem
            | Factor::MentalHealthHistory
            | Factor::Depression
            | Factor::Headache
            | Factor::BloodPressure
            | Factor::SleepQuality
            | Factor::BreathingProblem
            | Factor::SocialSupport
            | Factor::PeerPressure => FactorGroup::Psychological,
            _ => FactorGroup::AcademicEnvironmental,
        }
    }

    /// Look up a factor by its wire key
    pub fn from_key(key: &str) -> Option<Factor> {
        Factor::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// Position of the factor in the canonical order
    pub fn position(&self) -> usize {
        Factor::ALL
            .iter()
            .position(|f| f == self)
            .expect("factor is in ALL")
    }
}

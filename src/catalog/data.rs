use super::{Department, Doctor, Facility, Stat, Testimonial};

pub const DOCTORS: &[Doctor] = &[
    Doctor {
        id: "1",
        name: "Dr. Ananya Rao",
        specialization: "Neuroscience Specialist",
        experience_years: 8,
        bio: "Leads our Neuroscience department with a focus on compassionate, patient-centric diagnosis and treatment.",
        available: true,
    },
    Doctor {
        id: "2",
        name: "Dr. Marcus Thorne",
        specialization: "Heart Institute Chief",
        experience_years: 18,
        bio: "Dedicated to interventional cardiology and heart health education in the community.",
        available: true,
    },
    Doctor {
        id: "3",
        name: "Dr. Sarah Jenkins",
        specialization: "Pediatric Specialist",
        experience_years: 15,
        bio: "Known for her gentle approach that puts both children and parents at ease.",
        available: true,
    },
    Doctor {
        id: "4",
        name: "Dr. Julian Chen",
        specialization: "Orthopedic Surgeon",
        experience_years: 20,
        bio: "Helping athletes return to peak performance through minimally invasive techniques.",
        available: false,
    },
];

pub const DEPARTMENTS: &[Department] = &[
    Department {
        id: "heart",
        name: "Heart Institute",
        icon: "❤️",
        description: "Pioneering cardiac care with a focus on minimally invasive procedures and preventive cardiology.",
    },
    Department {
        id: "neuro",
        name: "Neuroscience",
        icon: "🧠",
        description: "Comprehensive care for the brain and spine, utilizing the latest in neuro-navigation technology.",
    },
    Department {
        id: "ortho",
        name: "Orthopedics & Sports",
        icon: "🦴",
        description: "Restoring mobility through advanced joint replacement and dedicated sports medicine rehabilitation.",
    },
    Department {
        id: "peds",
        name: "Pediatrics",
        icon: "👶",
        description: "Family-centered care for our youngest patients, from newborn intensive care to adolescent health.",
    },
    Department {
        id: "cancer",
        name: "Cancer Center",
        icon: "🔬",
        description: "Compassionate, personalized oncology care combining cutting-edge research with holistic support.",
    },
    Department {
        id: "emergency",
        name: "Trauma & Emergency",
        icon: "🚨",
        description: "Level 1 Trauma Center staffed 24/7 by board-certified emergency medicine specialists.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "t1",
        name: "Margaret Thompson",
        treatment: "KNEE REPLACEMENT",
        quote: "From the moment I walked in, I felt seen and heard. The recovery suites felt more like a hotel than a hospital.",
    },
    Testimonial {
        id: "t2",
        name: "Robert Davis",
        treatment: "EMERGENCY CARE",
        quote: "The speed and coordination of the emergency team was phenomenal. They saved my life, plain and simple.",
    },
    Testimonial {
        id: "t3",
        name: "Emily Chen",
        treatment: "MATERNITY",
        quote: "Giving birth at Nova was a beautiful experience. The nurses were incredibly supportive and attentive to my every need.",
    },
];

pub const FACILITIES: &[Facility] = &[
    Facility {
        title: "Precision Labs",
        description: "Ultra-high resolution imaging and diagnostics.",
    },
    Facility {
        title: "Nova Recovery Suites",
        description: "Luxury recovery environments for optimized healing.",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        label: "Specialists",
        value: "150+",
    },
    Stat {
        label: "Years Experience",
        value: "25+",
    },
    Stat {
        label: "Patient Satisfaction",
        value: "99%",
    },
    Stat {
        label: "Successful Surgeries",
        value: "40k+",
    },
];

pub const CORE_EXPERTISE: &[&str] = &[
    "Surgical Precision",
    "Patient Consult",
    "Advanced Diagnostics",
    "Clinical Research",
];

pub const CAMPUS_ADDRESS: &str = "123 Wellness Blvd, Healthcare City, HC 54321";
pub const EMERGENCY_PHONE: &str = "+1 (555) 911-0000";
pub const GENERAL_PHONE: &str = "+1 (555) 000-1234";

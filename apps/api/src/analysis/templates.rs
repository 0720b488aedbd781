// Static text tables for the generators.
// Kept apart from the generator logic so wording changes never touch control flow.

/// Labels used when no taxonomy category matched anything.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem solving", "Basic coding", "Projects"];

/// Employers classified as `Enterprise`. Matched case-insensitively as substrings of the company name.
pub const ENTERPRISE_ROSTER: &[&str] = &[
    "Amazon",
    "Google",
    "Microsoft",
    "Apple",
    "Infosys",
    "TCS",
    "Wipro",
    "Accenture",
    "IBM",
    "Facebook",
    "Meta",
    "Tesla",
    "Netflix",
    "LinkedIn",
    "Oracle",
    "Salesforce",
];

// ── Round checklist ──────────────────────────────────────────────────────────

pub const CHECKLIST_TEMPLATE: &[(&str, &[&str])] = &[
    (
        "Round 1: Aptitude / Basics",
        &[
            "Understand fundamentals",
            "Practice basic logic",
            "Prepare for numerical reasoning",
            "Review English comprehension",
            "Take mock aptitude tests",
            "Analyze your weak areas",
            "Create quick reference sheet",
            "Practice under time pressure",
        ],
    ),
    (
        "Round 2: DSA + Core CS",
        &[
            "Master data structures",
            "Practice sorting and searching",
            "Learn tree and graph concepts",
            "Solve 50+ DSA problems",
            "Understand time complexity",
            "Review OS fundamentals",
            "Study DBMS concepts",
            "Practice coding under time limit",
        ],
    ),
    (
        "Round 3: Technical Interview",
        &[
            "Showcase your projects",
            "Explain tech stack depth",
            "Practice system design",
            "Prepare for behavioral questions",
            "Mock interview practice",
            "Review your GitHub",
            "Plan project walkthrough",
            "Study company products",
        ],
    ),
    (
        "Round 4: HR / Managerial",
        &[
            "Prepare self introduction",
            "Understand company culture",
            "Research company background",
            "Prepare career goals",
            "Practice salary negotiation",
            "Prepare thoughtful questions",
            "Review your resume",
            "Mock HR round",
        ],
    ),
];

// ── 7-day plan ───────────────────────────────────────────────────────────────

/// (day label, focus, tasks)
pub const PLAN_TEMPLATE: &[(&str, &str, &[&str])] = &[
    (
        "Day 1-2",
        "Basics + Core CS",
        &[
            "Review OS fundamentals",
            "Study data structures basics",
            "Practice 5 basic questions",
            "Understand time complexity",
        ],
    ),
    (
        "Day 3-4",
        "DSA + Coding Practice",
        &[
            "Master arrays and linked lists",
            "Practice 10 coding problems",
            "Learn sorting algorithms",
            "Implement 3 data structures from scratch",
        ],
    ),
    (
        "Day 5",
        "Projects + Resume Alignment",
        &[
            "List your 2-3 best projects",
            "Align projects with JD skills",
            "Prepare 2-minute project explanations",
            "Update resume if needed",
        ],
    ),
    (
        "Day 6",
        "Mock Interview Questions",
        &[
            "Generate likely interview questions",
            "Practice HR questions",
            "Record yourself answering",
            "Get feedback from peers",
        ],
    ),
    (
        "Day 7",
        "Revision + Weak Areas",
        &[
            "Revise weak concepts",
            "Re-practice difficult problems",
            "Mock interview round",
            "Final readiness check",
        ],
    ),
];

pub const PLAN_WEB_TASK: &str = "Review frontend/backend patterns";
pub const PLAN_TESTING_TASK: &str = "Practice automation testing concepts";

// ── Interview rounds ─────────────────────────────────────────────────────────

/// (round title, focus areas, why it matters)
pub const ENTERPRISE_ROUNDS: &[(&str, &[&str], &str)] = &[
    ("Online Assessment", &["DSA", "Aptitude"], "Initial screening to handle volume"),
    ("Technical Round 1", &["DSA", "Coding"], "Coding fundamentals and problem solving"),
    ("Technical Round 2", &["System Design", "Core CS"], "Deeper technical knowledge"),
    ("Managerial Round", &["Leadership", "Communication"], "Fit and growth potential"),
    ("HR Round", &["Behavioral", "Culture"], "Final cultural fit assessment"),
];

pub const STARTUP_ROUNDS: &[(&str, &[&str], &str)] = &[
    (
        "Technical Round 1",
        &["Practical coding", "Project discussion"],
        "Quick assessment of actual skills",
    ),
    (
        "Technical Round 2",
        &["System thinking", "Architecture"],
        "Problem-solving approach",
    ),
    (
        "Founder / Manager Chat",
        &["Fit", "Learning attitude"],
        "Culture alignment and growth mindset",
    ),
];

pub const TECHNICAL_TOKEN: &str = "Technical";
pub const WEB_FOCUS_AREA: &str = "Frontend/Backend";

// ── Interview questions ──────────────────────────────────────────────────────

pub const DSA_QUESTIONS: &[&str] = &[
    "How would you optimize search in sorted data? Discuss time/space complexity.",
    "Explain the difference between array and linked list. When to use each?",
    "What is a hash table and how does it handle collisions?",
];

pub const DATA_QUESTIONS: &[&str] = &[
    "Explain indexing and when it helps improve query performance.",
    "What is database normalization and why is it important?",
];

pub const JAVA_QUESTIONS: &[&str] = &[
    "Explain multithreading and synchronization in Java.",
    "What are the SOLID principles and how do you apply them?",
];

pub const PYTHON_QUESTIONS: &[&str] = &[
    "What is the GIL (Global Interpreter Lock) in Python?",
    "Explain list comprehensions and when to use them.",
];

pub const REACT_QUESTIONS: &[&str] = &[
    "Explain React hooks and the lifecycle of useEffect.",
    "What are state management options? Discuss Redux vs Context API.",
    "Explain async/await and promises in JavaScript.",
];

pub const CONTAINER_QUESTIONS: &[&str] = &[
    "What is containerization and how does Docker help?",
    "Explain microservices architecture and when to use it.",
];

pub const TESTING_QUESTIONS: &[&str] = &[
    "What is the difference between unit and integration testing?",
    "How do you approach automating test scenarios?",
];

pub const GENERIC_QUESTIONS: &[&str] = &[
    "Tell me about a challenging project and how you solved it.",
    "How do you debug a complex system issue?",
    "What software development practices do you follow?",
    "How do you handle tight deadlines?",
    "Describe your biggest learning in recent projects.",
    "How do you stay updated with technology?",
    "Explain a recent system design you worked on.",
    "What is your approach to writing clean, maintainable code?",
    "How do you ensure code quality in your team?",
    "Describe a time you had to learn something quickly.",
];

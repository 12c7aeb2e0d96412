//! Interest topics and goal templates offered during onboarding.

/// Topics a learner can pick from.
pub const INTEREST_OPTIONS: [&str; 8] = [
    "Web Development",
    "Data Science & ML",
    "UI/UX Design",
    "Mobile App Development",
    "Cybersecurity",
    "Cloud Computing",
    "Game Development",
    "Project Management",
];

/// Goals suggested regardless of the selected interests.
pub const DEFAULT_GOALS: [&str; 4] = [
    "Land a new job in my field of interest.",
    "Build a significant project to add to my portfolio.",
    "Prepare for and pass a technical certification exam.",
    "Gain a deep understanding of a new technology stack.",
];

/// Goal templates for a single interest topic. Unknown topics have none.
pub fn goal_templates(interest: &str) -> &'static [&'static str] {
    match interest {
        "Web Development" => &[
            "Build a full-stack e-commerce application from scratch.",
            "Create an interactive personal portfolio with modern animations.",
            "Master responsive web design using advanced CSS techniques.",
            "Develop a real-time chat application with WebSockets.",
        ],
        "Data Science & ML" => &[
            "Construct and train a neural network for image recognition.",
            "Analyze a large public dataset to uncover hidden insights.",
            "Build a movie recommendation engine using collaborative filtering.",
            "Create a predictive model for financial market trends.",
        ],
        "UI/UX Design" => &[
            "Design and prototype a mobile banking application for iOS.",
            "Create a comprehensive design system for a web application.",
            "Conduct user research and usability testing for a new feature.",
            "Master advanced animation and micro-interaction design.",
        ],
        "Mobile App Development" => &[
            "Build a social media app for iOS and Android using React Native.",
            "Develop a fitness tracking app that uses device sensors.",
            "Create a mobile game with a simple physics engine.",
            "Publish an app on the Google Play Store and Apple App Store.",
        ],
        "Cybersecurity" => &[
            "Learn ethical hacking techniques and perform penetration testing.",
            "Set up a secure home network and understand threat detection.",
            "Master cryptography and secure data transmission principles.",
            "Achieve a recognized cybersecurity certification (e.g., CompTIA Security+).",
        ],
        "Cloud Computing" => &[
            "Deploy a scalable web application on AWS or Google Cloud.",
            "Master containerization with Docker and orchestration with Kubernetes.",
            "Become a certified cloud architect on a major platform.",
            "Implement a serverless architecture for a data processing pipeline.",
        ],
        "Game Development" => &[
            "Create a 2D platformer game using the Unity engine.",
            "Develop a 3D exploration game with basic AI for enemies.",
            "Learn game physics and create a custom physics simulation.",
            "Design and implement the core mechanics for a puzzle game.",
        ],
        "Project Management" => &[
            "Master Agile and Scrum methodologies for software projects.",
            "Learn to use project management tools like Jira or Trello effectively.",
            "Lead a mock project from conception to completion.",
            "Get certified as a Project Management Professional (PMP).",
        ],
        _ => &[],
    }
}

/// Suggested goals for the selected interests.
///
/// Templates of each interest come first, in selection order, followed by
/// the default goals. Duplicates are dropped. With no interests only the
/// default goals are returned.
///
/// # Examples
///
/// ```rust
/// use questline_core::models::catalog::{suggested_goals, DEFAULT_GOALS};
///
/// let goals = suggested_goals(&[]);
/// assert_eq!(goals, DEFAULT_GOALS.to_vec());
///
/// let goals = suggested_goals(&["Cybersecurity".to_string()]);
/// assert_eq!(goals.len(), 8);
/// assert!(goals[0].starts_with("Learn ethical hacking"));
/// ```
pub fn suggested_goals(interests: &[String]) -> Vec<&'static str> {
    let mut goals: Vec<&'static str> = Vec::new();
    let templates = interests
        .iter()
        .flat_map(|interest| goal_templates(interest).iter().copied())
        .chain(DEFAULT_GOALS);

    for goal in templates {
        if !goals.contains(&goal) {
            goals.push(goal);
        }
    }

    goals
}

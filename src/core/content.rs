//! Static page content
//!
//! Feature, step, FAQ and statistics data shared by the page components,
//! plus the small amount of logic the FAQ page needs.

/// A feature card; `icon` is a name from `ui::icons`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Home page highlights
pub const HIGHLIGHTS: [Feature; 3] = [
    Feature {
        icon: "smartphone",
        title: "Native mobile application in your name",
        description: "Your official application on Apple & Google Play: services, bookings, payments, push notifications. 100% white label.",
    },
    Feature {
        icon: "calendar",
        title: "Bookings, payments, revenue & marketing",
        description: "A single dashboard to run the business: appointments, takings, financial views (gross/net revenue, costs, margin) and marketing campaigns. Filters by service and by team.",
    },
    Feature {
        icon: "users",
        title: "Staff, HR and application per member",
        description: "Schedules, goals, performance, and a dedicated application for each staff member: contracts, payment receipts, internal documents. Everything is connected.",
    },
];

/// One-line summaries of the CRM modules
pub const CRM_MODULES: [&str; 8] = [
    "STAFF AND ROLES · schedules · goals · performance",
    "EXPENSES AND BUDGET · cost tracking · exports",
    "HR AND DOCUMENTS · contracts · payment receipts · internal documents",
    "BOOKINGS AND PAYMENTS · no-shows · follow ups",
    "MARKETING · campaigns · push notifications · loyalty",
    "REPORTING · gross/net revenue · margin · clear tables",
    "CLIENT APPLICATION ON THE STORES · Apple App Store and Google Play, in your name",
    "INDIVIDUAL STAFF APPLICATION · each member has their own application to manage their agenda, communicate internally and access important documents",
];

/// Client application features, shown on the orbit
pub const APP_FEATURES: [Feature; 4] = [
    Feature {
        icon: "calendar",
        title: "Online Booking 24/7",
        description: "Let your customers book anytime, anywhere, no calls, no waiting. A seamless experience that's always available.",
    },
    Feature {
        icon: "credit-card",
        title: "Integrated Payments",
        description: "Accept secure payments directly within the app. Fast, simple, and hassle-free for you and your customers.",
    },
    Feature {
        icon: "bell",
        title: "Push Notifications",
        description: "Stay connected with instant updates, reminders, and promotions delivered straight to users' phones.",
    },
    Feature {
        icon: "gift",
        title: "Referral Programs",
        description: "Reward your customers for coming back and spreading the word. Build loyalty and grow your business at the same time.",
    },
];

/// CRM features, shown in a staggered grid
pub const CRM_FEATURES: [Feature; 8] = [
    Feature {
        icon: "users",
        title: "Team Planning & Access Control",
        description: "Easily schedule your teams, assign roles, and manage access levels. Each team member only sees what's relevant to them, ensuring an organized, secure, and error-free workflow.",
    },
    Feature {
        icon: "calendar",
        title: "Vacation-Time-Off Management",
        description: "Centralize the management of leaves and absences: requests, approvals, and real-time tracking. Simplify planning and avoid scheduling conflicts with a clear, automated system.",
    },
    Feature {
        icon: "database",
        title: "Full CRM with Customer History",
        description: "Keep the full history of your customers: past appointments, preferences, purchases, and communications. Deliver personalized follow-ups and strengthen client relationships with a 360° view.",
    },
    Feature {
        icon: "chart",
        title: "Business Analytics",
        description: "Access detailed statistics about your activity: performance, booking trends, and generated revenue. Make strategic decisions based on reliable, real-time data.",
    },
    Feature {
        icon: "bell",
        title: "Smart Reminders",
        description: "Reduce no-shows with automatic reminders sent by email or SMS. Keep clients informed of their upcoming appointments and ensure an optimized schedule.",
    },
    Feature {
        icon: "mail",
        title: "Email & SMS Campaigns",
        description: "Create and send targeted marketing campaigns in just a few clicks. Build customer loyalty, announce new offers, and boost bookings with personalized and effective messages.",
    },
    Feature {
        icon: "file",
        title: "Internal HR Management",
        description: "Centralize all your HR documents and communications in one place. Securely share internal tickets, expense receipts, pay slips, and other administrative information between managers and employees, directly within the CRM.",
    },
    Feature {
        icon: "dollar",
        title: "Real-Time Financial Tracking",
        description: "Your CRM is connected to your payment terminal, so revenue updates automatically with each transaction. The system calculates your gross and net income from inflows and expenses, giving you a clear view of your financial health.",
    },
];

pub const DISCOVERY_FEATURES: [Feature; 2] = [
    Feature {
        icon: "map-pin",
        title: "Interactive map",
        description: "Let users explore nearby services, locations with an easy-to-use interactive map.",
    },
    Feature {
        icon: "trending-up",
        title: "Client acquisition simplified",
        description: "Smart referrals, local discovery, and targeted campaigns, all designed to grow your client base effortlessly.",
    },
];

/// A step of the launch process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const LAUNCH_STEPS: [Step; 4] = [
    Step {
        number: 1,
        title: "Just Send the Basics, We'll Do the Rest",
        description: "Upload your logo, list your services, and share your brand colors. We'll create a fully personalized experience for your business.",
    },
    Step {
        number: 2,
        title: "Your App Preview Is Ready",
        description: "Explore the prototype we've tailored for you. Share your feedback and let's make it perfect.",
    },
    Step {
        number: 3,
        title: "Your App Is Ready to Launch",
        description: "The final version is complete and set for submission. Review everything and let us know when you're ready to go live.",
    },
    Step {
        number: 4,
        title: "Your App Is Now Live",
        description: "Now available on the App Store and Google Play, ready for users to download and explore.",
    },
];

/// Active users per country, animated on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryStat {
    pub name: &'static str,
    pub users: i64,
}

pub const COUNTRY_STATS: [CountryStat; 4] = [
    CountryStat { name: "Brasil", users: 50 },
    CountryStat { name: "Canada", users: 150 },
    CountryStat { name: "France", users: 45 },
    CountryStat { name: "Russia", users: 85 },
];

/// Everything included in the subscription
pub const PLAN_INCLUSIONS: [&str; 10] = [
    "Mobile application on the App Store and Google Play, 100% white label with your name and logo",
    "Complete installation and custom configuration within 10 business days",
    "Manager dashboard & complete CRM for appointments, clients, payments, teams, statistics and HR",
    "Dedicated staff application with schedules, real-time notifications and an internal HR space",
    "Detailed client records with history and preferences",
    "Integrated payments via Stripe or a connected terminal",
    "Built-in marketing tools: automatic reminders, client follow-ups, custom push notifications",
    "Multilingual: French and English",
    "Security and international compliance (GDPR, secure hosting)",
    "Priority technical support",
];

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

/// Category filter entry that matches every question
pub const ALL_CATEGORIES: &str = "All";

pub const FAQS: [FaqItem; 14] = [
    FaqItem {
        question: "How long until my app is live?",
        answer: "Under 10 days after receiving your materials (logo, services, etc.)",
        category: "Getting Started",
    },
    FaqItem {
        question: "Will the app have my name and brand?",
        answer: "Yes. Your logo, name, and colors appear in the app stores.",
        category: "Branding",
    },
    FaqItem {
        question: "Do I need technical skills?",
        answer: "Not at all. The platform is made for non-technical users.",
        category: "Technical",
    },
    FaqItem {
        question: "Will my clients understand how to use it?",
        answer: "Yes. The interface is intuitive and similar to modern apps.",
        category: "User Experience",
    },
    FaqItem {
        question: "Is support available?",
        answer: "Yes. A dedicated team is here to assist you anytime.",
        category: "Support",
    },
    FaqItem {
        question: "Do I keep 100% of my revenue?",
        answer: "Yes. MADYIS takes no commission on your bookings.",
        category: "Pricing",
    },
    FaqItem {
        question: "Can I cancel anytime?",
        answer: "A 12-month commitment is required. After that, you are free.",
        category: "Subscription",
    },
    FaqItem {
        question: "Is there an installation fee?",
        answer: "Yes, a one-time installation fee of $125 covers the custom configuration, the development of your application and its submission to the App Store and Google Play.",
        category: "Pricing",
    },
    FaqItem {
        question: "What happens after the 10-day launch period?",
        answer: "Your application goes live on the App Store and Google Play and your subscription starts. We provide ongoing support, updates and maintenance.",
        category: "Getting Started",
    },
    FaqItem {
        question: "Do you offer refunds?",
        answer: "We offer a 30-day money-back guarantee. If you are not satisfied within the first 30 days, we refund you in full.",
        category: "Pricing",
    },
    FaqItem {
        question: "Which languages are supported?",
        answer: "The application and the CRM are available in French and English. You can switch languages at any time in the settings.",
        category: "Technical",
    },
    FaqItem {
        question: "How do integrated payments work?",
        answer: "Payments are integrated through Stripe or a connected terminal. Your clients pay securely in the app and you keep 100% of your revenue.",
        category: "Pricing",
    },
    FaqItem {
        question: "Can I manage several locations or teams?",
        answer: "Yes. The CRM manages several locations, teams and services from a single dashboard, and every staff member gets a dedicated application.",
        category: "Features",
    },
    FaqItem {
        question: "Is my data secure and GDPR compliant?",
        answer: "Yes. All your data is hosted securely and we are fully compliant with the GDPR and international data protection regulations.",
        category: "Security",
    },
];

/// Filter entries: "All" followed by each distinct category in first-seen order
pub fn faq_categories(items: &[FaqItem]) -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }
    categories
}

/// Questions matching a filter entry, in their original order
pub fn filter_faqs<'a>(items: &'a [FaqItem], category: &str) -> Vec<&'a FaqItem> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .collect()
}

/// Accordion click: open `index`, or close it when it is already open.
pub fn toggle_open(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            faq_categories(&FAQS),
            vec![
                "All",
                "Getting Started",
                "Branding",
                "Technical",
                "User Experience",
                "Support",
                "Pricing",
                "Subscription",
                "Features",
                "Security",
            ]
        );
    }

    #[test]
    fn test_categories_of_empty_list() {
        assert_eq!(faq_categories(&[]), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(filter_faqs(&FAQS, ALL_CATEGORIES).len(), FAQS.len());

        let pricing = filter_faqs(&FAQS, "Pricing");
        assert_eq!(pricing.len(), 4);
        assert!(pricing.iter().all(|f| f.category == "Pricing"));
        assert_eq!(pricing[0].question, "Do I keep 100% of my revenue?");

        assert!(filter_faqs(&FAQS, "Unknown").is_empty());
    }

    #[test]
    fn test_accordion_keeps_one_open() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        let open = toggle_open(open, 5);
        assert_eq!(open, Some(5));
        assert_eq!(toggle_open(open, 5), None);
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        for (i, step) in LAUNCH_STEPS.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "web-solutions",
        title: "Web Solutions",
        icon: "💻",
        description: "Custom website design and development tailored to your business needs with responsive layouts and modern frameworks.",
        detailed_description: "Our web solutions are crafted to provide a seamless user experience across all devices. We use modern technologies like React, Next.js, and Node.js to build fast, scalable, and secure websites. From simple landing pages to complex e-commerce platforms, we've got you covered.",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?auto=format&fit=crop&w=2069&q=80",
    },
    Service {
        id: "app-development",
        title: "App Development",
        icon: "📱",
        description: "Native and cross-platform mobile applications designed for optimal user experience and performance.",
        detailed_description: "We build high-performance mobile applications for both iOS and Android. Whether you need a native app for maximum performance or a cross-platform app for a wider reach, our team has the expertise to deliver a product that your users will love.",
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?auto=format&fit=crop&w=2070&q=80",
    },
    Service {
        id: "seo-optimization",
        title: "SEO Optimization",
        icon: "🔍",
        description: "Enhance your online visibility with data-driven SEO strategies to improve search rankings and drive targeted traffic.",
        detailed_description: "Our SEO services are designed to increase your website's visibility on search engines like Google and Bing. We perform in-depth keyword research, on-page optimization, and link building to help you rank higher and attract more organic traffic.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=2015&q=80",
    },
    Service {
        id: "social-media-marketing",
        title: "Social Media Marketing",
        icon: "👥",
        description: "Leverage social platforms to build your brand, engage with your audience, and drive conversions.",
        detailed_description: "We create and manage social media campaigns that help you connect with your audience and grow your brand. From content creation to community management, we handle all aspects of your social media presence.",
        image: "https://images.unsplash.com/photo-1611926653458-09294b3142bf?auto=format&fit=crop&w=2070&q=80",
    },
    Service {
        id: "pay-per-click-marketing",
        title: "Pay-Per-Click Marketing",
        icon: "🖱️",
        description: "Targeted ad campaigns on search engines and social media to generate immediate traffic and leads.",
        detailed_description: "With our PPC campaigns, you can reach your target audience and drive immediate results. We manage your campaigns on platforms like Google Ads and Facebook Ads, ensuring you get the best return on your investment.",
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?auto=format&fit=crop&w=2070&q=80",
    },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub metric: &'static str,
    pub metric_label: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🎯",
        title: "Results-Driven Approach",
        metric: "98%",
        metric_label: "Success Rate",
        description: "We focus on measurable outcomes that directly impact your business growth and ROI.",
        benefits: &["Data-driven strategies", "Performance optimization", "ROI tracking"],
    },
    Feature {
        icon: "👥",
        title: "Expert Team",
        metric: "10+",
        metric_label: "Years Experience",
        description: "Seasoned professionals with deep expertise across all modern technologies.",
        benefits: &["Senior developers", "Certified specialists", "Continuous learning"],
    },
    Feature {
        icon: "🛡️",
        title: "Enterprise Security",
        metric: "99.9%",
        metric_label: "Uptime SLA",
        description: "Bank-grade security measures and infrastructure reliability you can trust.",
        benefits: &["ISO certified", "GDPR compliant", "24/7 monitoring"],
    },
    Feature {
        icon: "⏱️",
        title: "Rapid Delivery",
        metric: "2x",
        metric_label: "Faster Launch",
        description: "Accelerated development cycles without compromising on quality or security.",
        benefits: &["Agile methodology", "Continuous deployment", "Quick iterations"],
    },
];

// (icon, number, label)
pub const STATS: &[(&str, &str, &str)] = &[
    ("🏆", "500+", "Projects Completed"),
    ("👥", "150+", "Happy Clients"),
    ("⏱️", "24/7", "Support Available"),
    ("🛡️", "99.9%", "Uptime Guarantee"),
];

// (name, logo)
pub const TECH_ROWS: &[&[(&str, &str)]] = &[
    &[
        ("HTML5", "/tech-logos/html5.svg"),
        ("CSS3", "/tech-logos/css3.svg"),
        ("JavaScript", "/tech-logos/javascript.svg"),
        ("TypeScript", "/tech-logos/typescript.svg"),
        ("React", "/tech-logos/react.svg"),
        ("Tailwind CSS", "/tech-logos/tailwind.svg"),
    ],
    &[
        ("Node.js", "/tech-logos/nodejs.svg"),
        ("Laravel", "/tech-logos/laravel.svg"),
        ("MySQL", "/tech-logos/mysql.svg"),
        ("MongoDB", "/tech-logos/mongodb.svg"),
        ("PostgreSQL", "/tech-logos/postgresql.svg"),
        ("Redis", "/tech-logos/redis.svg"),
        ("React Native", "/tech-logos/react-native.svg"),
    ],
    &[
        ("Flutter", "/tech-logos/flutter.svg"),
        ("Swift", "/tech-logos/swift.svg"),
        ("AWS", "/tech-logos/aws.svg"),
        ("Firebase", "/tech-logos/firebase.svg"),
        ("Docker", "/tech-logos/docker.svg"),
    ],
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub height_px: u32,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Search Engine Optimization",
        category: "Consulting",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=2015&q=80",
        height_px: 400,
    },
    Project {
        title: "E-Commerce Platform",
        category: "Web Development",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=2070&q=80",
        height_px: 300,
    },
    Project {
        title: "Mobile App Development",
        category: "App Development",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=2070&q=80",
        height_px: 350,
    },
];

pub const MILESTONES: &[(&str, &str)] = &[
    ("Company Founded", "OrbitDynamix was established with a vision to provide innovative IT solutions."),
    ("Expansion Phase", "Expanded service offerings to include mobile app development and cloud solutions."),
    ("Global Reach", "Extended operations internationally with clients across three continents."),
    ("Innovation Leader", "Recognized as a leading technology innovator in digital transformation."),
];

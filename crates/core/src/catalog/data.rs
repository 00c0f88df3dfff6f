use super::{
    Resource, ResourceKind, RoadmapDefinition, SkillLevel, Step, StepResource, StepResourceKind,
};

const FRONTEND_DEV_STEPS: &[Step] = &[
    Step {
        id: "frontend-basics",
        title: "Basics of Web Development",
        description: "Learn HTML, CSS, and basic JavaScript to understand the structure, styling, and interactivity of web pages.",
        level: SkillLevel::Beginner,
        resources: &[
            StepResource {
                name: "HTML, CSS & JS for Beginners",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=mU6anWqZJcc",
            },
            StepResource {
                name: "Google HTML/CSS Style Guide",
                kind: StepResourceKind::Article,
                url: "https://google.github.io/styleguide/htmlcssguide.html",
            },
        ],
    },
    Step {
        id: "responsive-design",
        title: "Responsive Design & Advanced CSS",
        description: "Master media queries, flexbox, CSS grid, animations, and transitions for responsive and dynamic websites.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "Responsive Web Design Tutorial",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=srvUrASNj0s",
            },
            StepResource {
                name: "Responsive Web Design Fundamentals",
                kind: StepResourceKind::Course,
                url: "https://web.dev/learn/design/",
            },
        ],
    },
    Step {
        id: "js-deep-dive",
        title: "JavaScript Deep Dive",
        description: "Explore advanced JavaScript concepts including ES6+ features, asynchronous programming, and APIs.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "JavaScript Full Course for Beginners",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=PkZNo7MFNFg",
            },
            StepResource {
                name: "JavaScript.info",
                kind: StepResourceKind::Article,
                url: "https://javascript.info/",
            },
        ],
    },
    Step {
        id: "version-control",
        title: "Version Control",
        description: "Learn Git and GitHub for code management, collaboration, and version tracking.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "Git and GitHub for Beginners",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=RGOj5yH7evk",
            },
            StepResource {
                name: "Google Git Style Guide",
                kind: StepResourceKind::Article,
                url: "https://google.github.io/eng-practices/review/developer/small-cls.html",
            },
        ],
    },
    Step {
        id: "frameworks",
        title: "Frameworks & Libraries",
        description: "Learn React including JSX, components, props, state, hooks, routing, and APIs.",
        level: SkillLevel::Advanced,
        resources: &[
            StepResource {
                name: "React JS Full Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=bMknfKXIFA8",
            },
            StepResource {
                name: "React Documentation",
                kind: StepResourceKind::Article,
                url: "https://reactjs.org/docs/getting-started.html",
            },
        ],
    },
    Step {
        id: "build-projects",
        title: "Build Projects",
        description: "Create a portfolio, to-do list, weather app, blog, or dashboard to showcase your skills.",
        level: SkillLevel::Advanced,
        resources: &[
            StepResource {
                name: "Build a Portfolio with React",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=bmpI252DmiI",
            },
            StepResource {
                name: "Project Ideas for Web Developers",
                kind: StepResourceKind::Article,
                url: "https://www.freecodecamp.org/news/javascript-projects-for-beginners/",
            },
        ],
    },
    Step {
        id: "additional-skills",
        title: "Optional but Important",
        description: "Learn Tailwind CSS/Bootstrap, TypeScript, testing with Jest, and deployment options.",
        level: SkillLevel::Expert,
        resources: &[
            StepResource {
                name: "Tailwind CSS Crash Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=UBOj6rqRUME",
            },
            StepResource {
                name: "TypeScript for Beginners",
                kind: StepResourceKind::Course,
                url: "https://www.typescriptlang.org/docs/handbook/intro.html",
            },
        ],
    },
];

const BACKEND_DEV_STEPS: &[Step] = &[
    Step {
        id: "backend-basics",
        title: "Backend Fundamentals",
        description: "Choose a backend language like Node.js, Python, Java, or PHP to start your journey.",
        level: SkillLevel::Beginner,
        resources: &[
            StepResource {
                name: "Backend Development Full Course - Node.js",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=Oe421EPjeBE",
            },
            StepResource {
                name: "Node.js Documentation",
                kind: StepResourceKind::Article,
                url: "https://nodejs.org/en/docs/",
            },
        ],
    },
    Step {
        id: "apis",
        title: "APIs & Protocols",
        description: "Learn about REST and GraphQL APIs, HTTP protocols, and how to design efficient interfaces.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "RESTful APIs in Node.js",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=fsCjFHuMXj0",
            },
            StepResource {
                name: "GraphQL Tutorial",
                kind: StepResourceKind::Course,
                url: "https://graphql.org/learn/",
            },
        ],
    },
    Step {
        id: "databases",
        title: "Databases",
        description: "Work with SQL databases like MySQL/PostgreSQL and NoSQL databases like MongoDB.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "SQL Tutorial - Full Database Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=HXV3zeQKqGY",
            },
            StepResource {
                name: "MongoDB Crash Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=2QQGWYe7IDU",
            },
        ],
    },
    Step {
        id: "auth-security",
        title: "Authentication & Security",
        description: "Implement JWT, OAuth, secure your applications, and learn about hashing and CORS.",
        level: SkillLevel::Advanced,
        resources: &[
            StepResource {
                name: "Node.js Security Best Practices",
                kind: StepResourceKind::Article,
                url: "https://cheatsheetseries.owasp.org/cheatsheets/Nodejs_Security_Cheat_Sheet.html",
            },
            StepResource {
                name: "JWT Authentication Tutorial",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=7Q17ubqLfaM",
            },
        ],
    },
    Step {
        id: "deployment",
        title: "Deployment & DevOps",
        description: "Learn Docker, CI/CD pipelines, and deploy to cloud platforms like AWS, GCP, or Azure.",
        level: SkillLevel::Expert,
        resources: &[
            StepResource {
                name: "Docker Crash Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=fqMOX6JJhGo",
            },
            StepResource {
                name: "AWS for Beginners",
                kind: StepResourceKind::Course,
                url: "https://aws.amazon.com/getting-started/",
            },
        ],
    },
];

const FULLSTACK_DEV_STEPS: &[Step] = &[
    Step {
        id: "fullstack-basics",
        title: "Web Development Fundamentals",
        description: "Learn HTML, CSS, JavaScript, and understand how the web works end-to-end.",
        level: SkillLevel::Beginner,
        resources: &[
            StepResource {
                name: "Web Development In 2023 - Roadmap",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=EqzUcMzfV1w",
            },
            StepResource {
                name: "The Odin Project",
                kind: StepResourceKind::Course,
                url: "https://www.theodinproject.com/",
            },
        ],
    },
    Step {
        id: "frontend-skills",
        title: "Frontend Skills",
        description: "Master a modern JavaScript framework like React, Angular, or Vue.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "React Full Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=bMknfKXIFA8",
            },
            StepResource {
                name: "CSS Frameworks Comparison",
                kind: StepResourceKind::Article,
                url: "https://www.creative-tim.com/blog/web-design/best-css-frameworks/",
            },
        ],
    },
    Step {
        id: "backend-skills",
        title: "Backend Skills",
        description: "Learn Node.js/Express, Django, or Spring Boot for server-side development.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "Node.js and Express.js Full Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=Oe421EPjeBE",
            },
            StepResource {
                name: "Backend Comparison Guide",
                kind: StepResourceKind::Article,
                url: "https://www.freecodecamp.org/news/which-back-end-framework-should-i-use/",
            },
        ],
    },
    Step {
        id: "fullstack-databases",
        title: "Databases & Data Management",
        description: "Work with both SQL and NoSQL databases and understand when to use each.",
        level: SkillLevel::Advanced,
        resources: &[
            StepResource {
                name: "SQL vs NoSQL: Key Differences",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=Q5aTUc7c4jg",
            },
            StepResource {
                name: "Database Design Course",
                kind: StepResourceKind::Course,
                url: "https://www.khanacademy.org/computing/computer-programming/sql",
            },
        ],
    },
    Step {
        id: "fullstack-projects",
        title: "Full Stack Projects",
        description: "Build complete applications that showcase both frontend and backend skills.",
        level: SkillLevel::Advanced,
        resources: &[
            StepResource {
                name: "Full Stack MERN Application",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=ngc9gnGgUdA",
            },
            StepResource {
                name: "Project Ideas for Full Stack Developers",
                kind: StepResourceKind::Article,
                url: "https://www.freecodecamp.org/news/15-app-ideas-to-build-and-level-up-your-coding-skills",
            },
        ],
    },
    Step {
        id: "deployment-cicd",
        title: "Deployment & CI/CD",
        description: "Learn about hosting, serverless architectures, and automated deployment pipelines.",
        level: SkillLevel::Expert,
        resources: &[
            StepResource {
                name: "Deploy a Full Stack App to Heroku",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=MxfxiR8TVNU",
            },
            StepResource {
                name: "CI/CD with GitHub Actions",
                kind: StepResourceKind::Course,
                url: "https://lab.github.com/githubtraining/github-actions:-continuous-integration",
            },
        ],
    },
];

const DATA_SCIENTIST_STEPS: &[Step] = &[
    Step {
        id: "python-basics",
        title: "Python Fundamentals",
        description: "Learn Python programming language basics, which is essential for data science.",
        level: SkillLevel::Beginner,
        resources: &[
            StepResource {
                name: "Python for Data Science Full Course",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=LHBE6Q9XlzI",
            },
            StepResource {
                name: "Python Data Science Handbook",
                kind: StepResourceKind::Article,
                url: "https://jakevdp.github.io/PythonDataScienceHandbook/",
            },
        ],
    },
    Step {
        id: "data-analysis",
        title: "Data Analysis Libraries",
        description: "Master NumPy, Pandas, and Matplotlib for data manipulation and visualization.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "Pandas Tutorial",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=vmEHCJofslg",
            },
            StepResource {
                name: "Data Visualization with Matplotlib",
                kind: StepResourceKind::Course,
                url: "https://matplotlib.org/stable/tutorials/index.html",
            },
        ],
    },
    Step {
        id: "sql-data",
        title: "SQL for Data Analysis",
        description: "Learn SQL to query and analyze data from relational databases effectively.",
        level: SkillLevel::Intermediate,
        resources: &[
            StepResource {
                name: "SQL for Data Analysis",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=HXV3zeQKqGY",
            },
            StepResource {
                name: "Advanced SQL Queries",
                kind: StepResourceKind::Article,
                url: "https://mode.com/sql-tutorial/",
            },
        ],
    },
    Step {
        id: "machine-learning",
        title: "Machine Learning Fundamentals",
        description: "Learn the basics of machine learning with scikit-learn for predictive modeling.",
        level: SkillLevel::Advanced,
        resources: &[
            StepResource {
                name: "Machine Learning with Python",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=7eh4d6sabA0",
            },
            StepResource {
                name: "Google ML Crash Course",
                kind: StepResourceKind::Course,
                url: "https://developers.google.com/machine-learning/crash-course",
            },
        ],
    },
    Step {
        id: "deep-learning",
        title: "Deep Learning",
        description: "Explore neural networks and deep learning with TensorFlow and Keras.",
        level: SkillLevel::Expert,
        resources: &[
            StepResource {
                name: "Deep Learning Specialization",
                kind: StepResourceKind::Course,
                url: "https://www.coursera.org/specializations/deep-learning",
            },
            StepResource {
                name: "TensorFlow Tutorial",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=tPYj3fFJGjk",
            },
        ],
    },
    Step {
        id: "data-projects",
        title: "Data Science Projects",
        description: "Build a portfolio of data science projects to showcase your skills to employers.",
        level: SkillLevel::Expert,
        resources: &[
            StepResource {
                name: "Data Science Project from Scratch",
                kind: StepResourceKind::Video,
                url: "https://www.youtube.com/watch?v=MpF9HENQjDo",
            },
            StepResource {
                name: "Kaggle Competitions",
                kind: StepResourceKind::Course,
                url: "https://www.kaggle.com/competitions",
            },
        ],
    },
];

pub(crate) const ROADMAPS: &[RoadmapDefinition] = &[
    RoadmapDefinition {
        id: "frontend-dev",
        title: "Frontend Developer",
        description: "Learn to build beautiful and interactive user interfaces for web applications",
        icon: "🎨",
        steps: FRONTEND_DEV_STEPS,
    },
    RoadmapDefinition {
        id: "backend-dev",
        title: "Backend Developer",
        description: "Learn to build the server-side of applications, handle databases, and create APIs",
        icon: "🔧",
        steps: BACKEND_DEV_STEPS,
    },
    RoadmapDefinition {
        id: "fullstack-dev",
        title: "Full Stack Developer",
        description: "Master both frontend and backend development to build complete web applications",
        icon: "🚀",
        steps: FULLSTACK_DEV_STEPS,
    },
    RoadmapDefinition {
        id: "data-scientist",
        title: "Data Scientist",
        description: "Learn to analyze and interpret complex data to help organizations make better decisions",
        icon: "📊",
        steps: DATA_SCIENTIST_STEPS,
    },
];

pub(crate) const RESOURCES: &[Resource] = &[
    Resource {
        id: "1",
        title: "Frontend Developer Roadmap",
        description: "A complete roadmap to becoming a modern frontend developer in 2025.",
        link: "https://roadmap.sh/frontend",
        kind: ResourceKind::Article,
        tags: &["frontend", "web development", "all"],
    },
    Resource {
        id: "2",
        title: "Backend Developer Roadmap",
        description: "A comprehensive roadmap to becoming a backend developer in 2025.",
        link: "https://roadmap.sh/backend",
        kind: ResourceKind::Article,
        tags: &["backend", "web development", "all"],
    },
    Resource {
        id: "3",
        title: "React JS Crash Course",
        description: "A crash course covering React fundamentals for beginners.",
        link: "https://www.youtube.com/watch?v=w7ejDZ8SWv8",
        kind: ResourceKind::Video,
        tags: &["frontend", "react", "web development", "all"],
    },
    Resource {
        id: "4",
        title: "The Complete Node.js Course",
        description: "Comprehensive guide to building RESTful APIs with Node.js and Express.",
        link: "https://www.udemy.com/course/nodejs-express-mongodb-bootcamp/",
        kind: ResourceKind::Course,
        tags: &["backend", "node.js", "web development", "all"],
    },
    Resource {
        id: "5",
        title: "How to Create a Full-Stack Application",
        description: "Step-by-step tutorial for building a full-stack web application.",
        link: "https://www.freecodecamp.org/news/how-to-create-a-react-app-with-a-node-backend-the-complete-guide/",
        kind: ResourceKind::Tutorial,
        tags: &["fullstack", "web development", "all"],
    },
    Resource {
        id: "6",
        title: "Modern JavaScript Tutorial",
        description: "From the basics to advanced topics with simple, but detailed explanations.",
        link: "https://javascript.info/",
        kind: ResourceKind::Tutorial,
        tags: &["frontend", "javascript", "web development", "all"],
    },
    Resource {
        id: "7",
        title: "Git & GitHub Crash Course",
        description: "Learn the basics of Git and GitHub in this crash course.",
        link: "https://www.youtube.com/watch?v=RGOj5yH7evk",
        kind: ResourceKind::Video,
        tags: &["git", "version control", "all"],
    },
    Resource {
        id: "8",
        title: "Data Structures and Algorithms in JavaScript",
        description: "Learn data structures and algorithms in JavaScript for technical interviews.",
        link: "https://www.udemy.com/course/js-algorithms-and-data-structures-masterclass/",
        kind: ResourceKind::Course,
        tags: &["algorithms", "javascript", "all"],
    },
    Resource {
        id: "9",
        title: "TypeScript Handbook",
        description: "The official TypeScript documentation with detailed guides and examples.",
        link: "https://www.typescriptlang.org/docs/handbook/intro.html",
        kind: ResourceKind::Article,
        tags: &["typescript", "frontend", "backend", "all"],
    },
];

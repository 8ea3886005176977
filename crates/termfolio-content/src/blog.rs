//! Hardcoded blog posts.

/// A single post. `id` is the selection key used by the blog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub filename: &'static str,
    pub content: &'static str,
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: "modern-web-development",
        title: "Modern Web Development Trends 2024",
        date: "October 26, 2024",
        filename: "modern-web-development.md",
        content: "# Modern Web Development Trends 2024
Author: John Doe

## Key Trends

1. Server Components
   - Next.js and React Server Components
   - Improved performance and SEO
   - Reduced client-side JavaScript

2. Edge Computing
   - Serverless functions at the edge
   - Reduced latency
   - Better user experience

3. AI Integration
   - ChatGPT and similar models
   - Code assistance
   - Content generation",
    },
    BlogPost {
        id: "docker-best-practices",
        title: "Docker Best Practices for Production",
        date: "October 25, 2024",
        filename: "docker-best-practices.md",
        content: "# Docker Best Practices for Production
Author: Ibrahim Zaman

## Key Points

1. Multi-stage Builds
   - Reduce final image size
   - Separate build and runtime dependencies
   - Improved security

2. Security Considerations
   - Run as non-root user
   - Scan for vulnerabilities
   - Use specific tags

3. Performance Optimization
   - Layer caching
   - Minimal base images
   - Efficient Dockerfile instructions",
    },
    BlogPost {
        id: "react-hooks-guide",
        title: "Complete Guide to React Hooks",
        date: "October 24, 2024",
        filename: "react-hooks-guide.md",
        content: "# Complete Guide to React Hooks
Author: Ibrahim Zaman

## Essential Hooks

1. useState
   - State management
   - Component updates
   - Best practices

2. useEffect
   - Side effects
   - Cleanup functions
   - Dependencies

3. Custom Hooks
   - Reusable logic
   - Code organization
   - Testing strategies",
    },
];

/// Look up a post by id.
pub fn find_post(id: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.id == id)
}

impl BlogPost {
    /// Link label shown in the blog listing.
    pub fn link_label(&self) -> String {
        format!("→ {} - {}", self.filename, self.title)
    }
}

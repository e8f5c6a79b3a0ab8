//! Course registry
//!
//! The fixed set of courses a driver can choose from, keyed by a small
//! integer identifier. Built once at startup from the shared drone and clock;
//! the mapping never changes afterwards.

use heapless::{LinearMap, Vec};

use crate::course::{Choreography, Course, COURSE_A, COURSE_B};
use crate::traits::{Clock, DroneControl};

/// Course identifier
pub type CourseId = u8;

/// Maximum courses in a registry
pub const MAX_COURSES: usize = 4;

/// Identifier of Course A
pub const COURSE_A_ID: CourseId = 1;

/// Identifier of Course B
pub const COURSE_B_ID: CourseId = 2;

/// Courses installed by [`build_default_courses`]
pub const DEFAULT_COURSES: [(CourseId, Choreography); 2] =
    [(COURSE_A_ID, COURSE_A), (COURSE_B_ID, COURSE_B)];

/// Immutable id → course mapping
pub struct CourseRegistry<'d, D, C> {
    courses: LinearMap<CourseId, Course<'d, D, C>, MAX_COURSES>,
}

/// Build the default courses bound to one drone and one clock
pub fn build_default_courses<'d, D, C>(drone: &'d D, clock: &'d C) -> CourseRegistry<'d, D, C>
where
    D: DroneControl,
    C: Clock,
{
    let mut courses = LinearMap::new();
    for (id, choreography) in DEFAULT_COURSES {
        // Cannot overflow: DEFAULT_COURSES is shorter than MAX_COURSES
        let _ = courses.insert(id, Course::new(choreography, drone, clock));
    }
    CourseRegistry { courses }
}

impl<'d, D, C> CourseRegistry<'d, D, C>
where
    D: DroneControl,
    C: Clock,
{
    /// Look up a course by id
    pub fn get(&self, id: CourseId) -> Option<&Course<'d, D, C>> {
        self.courses.get(&id)
    }

    /// Iterate courses in construction order
    pub fn iter(&self) -> impl Iterator<Item = (CourseId, &Course<'d, D, C>)> {
        self.courses.iter().map(|(id, course)| (*id, course))
    }

    /// Identifiers of all courses
    pub fn ids(&self) -> Vec<CourseId, MAX_COURSES> {
        self.courses.keys().copied().collect()
    }

    /// Number of courses
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if the registry holds no course
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Stop every running course
    pub fn stop_all(&self) {
        for course in self.courses.values() {
            course.stop();
        }
    }
}

use std::collections::VecDeque;

/// Most recently searched cities, newest first and without duplicates
pub struct RecentCities {
    cities: VecDeque<String>,
    capacity: usize,
}

impl RecentCities {
    /// Creates an empty list
    ///
    /// # Arguments
    ///
    /// * 'capacity' - max number of cities to remember
    pub fn new(capacity: usize) -> Self {
        RecentCities { cities: VecDeque::with_capacity(capacity), capacity }
    }

    /// Moves the city to the front, dropping the oldest city when full
    ///
    /// # Arguments
    ///
    /// * 'city' - city to remember, compared by exact match
    pub fn add(&mut self, city: &str) {
        if let Some(pos) = self.cities.iter().position(|c| c == city) {
            self.cities.remove(pos);
        }
        self.cities.push_front(city.to_string());
        self.cities.truncate(self.capacity);
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.cities.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut recent = RecentCities::new(5);
        recent.add("Oslo");
        recent.add("Bergen");

        assert_eq!(recent.to_vec(), vec!["Bergen", "Oslo"]);
    }

    #[test]
    fn same_city_twice_is_kept_once() {
        let mut recent = RecentCities::new(5);
        recent.add("Oslo");
        recent.add("Oslo");

        assert_eq!(recent.to_vec(), vec!["Oslo"]);
    }

    #[test]
    fn repeated_city_moves_to_front() {
        let mut recent = RecentCities::new(5);
        recent.add("Oslo");
        recent.add("Bergen");
        recent.add("Tromsø");
        recent.add("Oslo");

        assert_eq!(recent.to_vec(), vec!["Oslo", "Tromsø", "Bergen"]);
    }

    #[test]
    fn match_is_exact() {
        let mut recent = RecentCities::new(5);
        recent.add("oslo");
        recent.add("Oslo");

        assert_eq!(recent.to_vec(), vec!["Oslo", "oslo"]);
    }

    #[test]
    fn oldest_is_evicted_at_capacity() {
        let mut recent = RecentCities::new(3);
        for city in ["A", "B", "C", "D"] {
            recent.add(city);
        }

        assert_eq!(recent.to_vec(), vec!["D", "C", "B"]);
    }
}

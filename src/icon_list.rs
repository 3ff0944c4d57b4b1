use crate::config::IconEntry;

// The ordered dock icons plus the table selection that follows them around.
// Every mutation keeps the selection on the row that was acted upon, the way
// the icon table re-selects after a rebuild.
#[derive(Debug, Clone, Default)]
pub struct IconList {
    entries: Vec<IconEntry>,
    selected_row: Option<usize>,
}

impl IconList {
    pub fn new(entries: Vec<IconEntry>) -> Self {
        let selected_row = if entries.is_empty() { None } else { Some(0) };
        Self {
            entries,
            selected_row,
        }
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    pub fn selected_entry(&self) -> Option<&IconEntry> {
        self.selected_row.and_then(|row| self.entries.get(row))
    }

    pub fn select_row(&mut self, row: usize) {
        self.selected_row = if row < self.entries.len() {
            Some(row)
        } else {
            None
        };
    }

    pub fn entry_mut(&mut self, row: usize) -> Option<&mut IconEntry> {
        self.entries.get_mut(row)
    }

    pub fn append(&mut self, entry: IconEntry) {
        self.entries.push(entry);
        self.selected_row = Some(self.entries.len() - 1);
    }

    pub fn insert_at(&mut self, row: usize, entry: IconEntry) {
        if row > self.entries.len() {
            return;
        }
        self.entries.insert(row, entry);
        self.selected_row = Some(row);
    }

    // removing the last row moves the selection one row up, removing any
    // other row keeps the selection at the same position
    pub fn remove_at(&mut self, row: usize) {
        if row >= self.entries.len() {
            return;
        }

        let last_row = self.entries.len() - 1;
        self.entries.remove(row);

        self.selected_row = if self.entries.is_empty() {
            None
        } else if row == last_row {
            Some(row - 1)
        } else {
            Some(row)
        };
    }

    pub fn remove_selected(&mut self) {
        if let Some(row) = self.selected_row {
            self.remove_at(row);
        }
    }

    pub fn replace_selected(&mut self, entry: IconEntry) {
        if let Some(row) = self.selected_row {
            self.entries[row] = entry;
        }
    }

    pub fn move_selected_to_top(&mut self) {
        let Some(row) = self.selected_row else {
            return;
        };
        if row != 0 {
            let entry = self.entries.remove(row);
            self.entries.insert(0, entry);
            self.selected_row = Some(0);
        }
    }

    pub fn move_selected_up(&mut self) {
        let Some(row) = self.selected_row else {
            return;
        };
        if row != 0 {
            let entry = self.entries.remove(row);
            self.entries.insert(row - 1, entry);
            self.selected_row = Some(row - 1);
        }
    }

    pub fn move_selected_down(&mut self) {
        let Some(row) = self.selected_row else {
            return;
        };
        if row != self.entries.len() - 1 {
            let entry = self.entries.remove(row);
            self.entries.insert(row + 1, entry);
            self.selected_row = Some(row + 1);
        }
    }

    pub fn move_selected_to_bottom(&mut self) {
        let Some(row) = self.selected_row else {
            return;
        };
        if row != self.entries.len() - 1 {
            let entry = self.entries.remove(row);
            self.entries.push(entry);
            self.selected_row = Some(self.entries.len() - 1);
        }
    }
}

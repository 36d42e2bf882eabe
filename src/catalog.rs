//! The fixed, ordered report catalog.
//!
//! Each report is a fully written-out SELECT over the classic-models schema.
//! Reports are independent read-only statements; running them in any order
//! yields the same results, but the catalog order is part of the contract.

/// Distinct-purchaser cutoff used by the under-reached products report.
pub const DEFAULT_PURCHASER_THRESHOLD: u32 = 20;

/// A named report: a label for the output header and the SQL to run.
#[derive(Debug, Clone)]
pub struct Report {
    pub label: &'static str,
    pub sql: String,
}

impl Report {
    fn new(label: &'static str, sql: impl Into<String>) -> Self {
        Self {
            label,
            sql: sql.into(),
        }
    }
}

/// Build the full catalog in its fixed order.
///
/// `purchaser_threshold` parameterizes only the final report (employees who
/// sold products ordered by fewer than that many distinct customers).
pub fn catalog(purchaser_threshold: u32) -> Vec<Report> {
    vec![
        Report::new(
            "Schema inspection",
            "SELECT name, sql\n\
             FROM sqlite_master\n\
             WHERE type = 'table'",
        ),
        Report::new(
            "Employees in Boston",
            "SELECT e.firstName, e.lastName, e.jobTitle\n\
             FROM employees e\n\
             JOIN offices o ON e.officeCode = o.officeCode\n\
             WHERE o.city = 'Boston'",
        ),
        Report::new(
            "Offices with zero employees",
            "SELECT o.officeCode, o.city, COUNT(e.employeeNumber) AS num_employees\n\
             FROM offices o\n\
             LEFT JOIN employees e ON o.officeCode = e.officeCode\n\
             GROUP BY o.officeCode, o.city\n\
             HAVING COUNT(e.employeeNumber) = 0",
        ),
        Report::new(
            "All employees with office city/state",
            "SELECT e.firstName, e.lastName, o.city, o.state\n\
             FROM employees e\n\
             LEFT JOIN offices o ON e.officeCode = o.officeCode\n\
             ORDER BY e.firstName ASC, e.lastName ASC",
        ),
        Report::new(
            "Customers with no orders",
            "SELECT c.contactFirstName, c.contactLastName, c.phone, c.salesRepEmployeeNumber\n\
             FROM customers c\n\
             LEFT JOIN orders o ON c.customerNumber = o.customerNumber\n\
             WHERE o.orderNumber IS NULL\n\
             ORDER BY c.contactLastName ASC",
        ),
        // amount is stored as text; the cast keeps the sort numeric rather
        // than lexicographic.
        Report::new(
            "Customer payments sorted by amount (descending)",
            "SELECT c.contactFirstName, c.contactLastName, p.paymentDate, p.amount,\n\
                    CAST(p.amount AS REAL) AS amount_numeric\n\
             FROM customers c\n\
             JOIN payments p ON c.customerNumber = p.customerNumber\n\
             ORDER BY amount_numeric DESC",
        ),
        Report::new(
            "Employees with avg customer credit limit > 90000",
            "SELECT e.employeeNumber, e.firstName, e.lastName,\n\
                    COUNT(c.customerNumber) AS num_customers\n\
             FROM employees e\n\
             JOIN customers c ON e.employeeNumber = c.salesRepEmployeeNumber\n\
             GROUP BY e.employeeNumber, e.firstName, e.lastName\n\
             HAVING AVG(c.creditLimit) > 90000\n\
             ORDER BY num_customers DESC",
        ),
        Report::new(
            "Top-selling products by total units",
            "SELECT p.productName, COUNT(od.orderNumber) AS numorders,\n\
                    SUM(od.quantityOrdered) AS totalunits\n\
             FROM products p\n\
             JOIN orderdetails od ON p.productCode = od.productCode\n\
             GROUP BY p.productName\n\
             ORDER BY totalunits DESC",
        ),
        Report::new(
            "Unique customer count per product",
            "SELECT p.productName, p.productCode,\n\
                    COUNT(DISTINCT o.customerNumber) AS numpurchasers\n\
             FROM products p\n\
             JOIN orderdetails od ON p.productCode = od.productCode\n\
             JOIN orders o ON od.orderNumber = o.orderNumber\n\
             GROUP BY p.productName, p.productCode\n\
             ORDER BY numpurchasers DESC",
        ),
        Report::new(
            "Customer count per office",
            "SELECT o.officeCode, o.city, COUNT(DISTINCT c.customerNumber) AS n_customers\n\
             FROM offices o\n\
             JOIN employees e ON o.officeCode = e.officeCode\n\
             JOIN customers c ON e.employeeNumber = c.salesRepEmployeeNumber\n\
             GROUP BY o.officeCode, o.city\n\
             ORDER BY n_customers DESC",
        ),
        Report::new(
            "Employees who sold under-reached products",
            format!(
                "SELECT e.employeeNumber, e.firstName, e.lastName, o.city, o.officeCode\n\
                 FROM employees e\n\
                 JOIN offices o ON e.officeCode = o.officeCode\n\
                 JOIN customers c ON e.employeeNumber = c.salesRepEmployeeNumber\n\
                 JOIN orders ord ON c.customerNumber = ord.customerNumber\n\
                 JOIN orderdetails od ON ord.orderNumber = od.orderNumber\n\
                 WHERE od.productCode IN (\n\
                     SELECT p.productCode\n\
                     FROM products p\n\
                     JOIN orderdetails od2 ON p.productCode = od2.productCode\n\
                     JOIN orders ord2 ON od2.orderNumber = ord2.orderNumber\n\
                     GROUP BY p.productCode\n\
                     HAVING COUNT(DISTINCT ord2.customerNumber) < {threshold}\n\
                 )\n\
                 GROUP BY e.employeeNumber, e.firstName, e.lastName, o.city, o.officeCode\n\
                 ORDER BY e.employeeNumber",
                threshold = purchaser_threshold
            ),
        ),
    ]
}

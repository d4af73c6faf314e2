//! SQL 키워드 레지스트리
//!
//! 빌더가 인식하는 키워드(예약 + 비예약)의 고정 집합입니다.
//! 두 목록 모두 정렬되어 있어 이진 탐색으로 조회합니다.
//! 비교는 대소문자를 구분합니다 (`select`는 키워드가 아님).

/// 키워드 여부 (예약 ∪ 비예약)
pub fn is_keyword(token: &str) -> bool {
    is_reserved(token) || NON_RESERVED.binary_search(&token).is_ok()
}

/// 예약 키워드 여부
pub fn is_reserved(token: &str) -> bool {
    RESERVED.binary_search(&token).is_ok()
}

/// 예약 키워드 (MySQL 8.0)
pub const RESERVED: &[&str] = &[
    "ACCESSIBLE", "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC", "ASENSITIVE", "BEFORE",
    "BETWEEN", "BIGINT", "BINARY", "BLOB", "BOTH", "BY", "CALL", "CASCADE", "CASE", "CHANGE",
    "CHAR", "CHARACTER", "CHECK", "COLLATE", "COLUMN", "CONDITION", "CONSTRAINT", "CONTINUE",
    "CONVERT", "CREATE", "CROSS", "CUBE", "CUME_DIST", "CURRENT_DATE", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR", "DATABASE", "DATABASES", "DAY_HOUR",
    "DAY_MICROSECOND", "DAY_MINUTE", "DAY_SECOND", "DEC", "DECIMAL", "DECLARE", "DEFAULT",
    "DELAYED", "DELETE", "DENSE_RANK", "DESC", "DESCRIBE", "DETERMINISTIC", "DISTINCT",
    "DISTINCTROW", "DIV", "DOUBLE", "DROP", "DUAL", "EACH", "ELSE", "ELSEIF", "EMPTY",
    "ENCLOSED", "ESCAPED", "EXCEPT", "EXISTS", "EXIT", "EXPLAIN", "FALSE", "FETCH",
    "FIRST_VALUE", "FLOAT", "FLOAT4", "FLOAT8", "FOR", "FORCE", "FOREIGN", "FROM", "FULLTEXT",
    "FUNCTION", "GENERATED", "GET", "GRANT", "GROUP", "GROUPING", "GROUPS", "HAVING",
    "HIGH_PRIORITY", "HOUR_MICROSECOND", "HOUR_MINUTE", "HOUR_SECOND", "IF", "IGNORE", "IN",
    "INDEX", "INFILE", "INNER", "INOUT", "INSENSITIVE", "INSERT", "INT", "INT1", "INT2", "INT3",
    "INT4", "INT8", "INTEGER", "INTERSECT", "INTERVAL", "INTO", "IO_AFTER_GTIDS",
    "IO_BEFORE_GTIDS", "IS", "ITERATE", "JOIN", "JSON_TABLE", "KEY", "KEYS", "KILL", "LAG",
    "LAST_VALUE", "LATERAL", "LEAD", "LEADING", "LEAVE", "LEFT", "LIKE", "LIMIT", "LINEAR",
    "LINES", "LOAD", "LOCALTIME", "LOCALTIMESTAMP", "LOCK", "LONG", "LONGBLOB", "LONGTEXT",
    "LOOP", "LOW_PRIORITY", "MASTER_BIND", "MASTER_SSL_VERIFY_SERVER_CERT", "MATCH", "MAXVALUE",
    "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT", "MIDDLEINT", "MINUTE_MICROSECOND", "MINUTE_SECOND",
    "MOD", "MODIFIES", "NATURAL", "NOT", "NO_WRITE_TO_BINLOG", "NTH_VALUE", "NTILE", "NULL",
    "NUMERIC", "OF", "ON", "OPTIMIZE", "OPTIMIZER_COSTS", "OPTION", "OPTIONALLY", "OR", "ORDER",
    "OUT", "OUTER", "OUTFILE", "OVER", "PARTITION", "PERCENT_RANK", "PRECISION", "PRIMARY",
    "PROCEDURE", "PURGE", "RANGE", "RANK", "READ", "READS", "READ_WRITE", "REAL", "RECURSIVE",
    "REFERENCES", "REGEXP", "RELEASE", "RENAME", "REPEAT", "REPLACE", "REQUIRE", "RESIGNAL",
    "RESTRICT", "RETURN", "REVOKE", "RIGHT", "RLIKE", "ROW", "ROWS", "ROW_NUMBER", "SCHEMA",
    "SCHEMAS", "SECOND_MICROSECOND", "SELECT", "SENSITIVE", "SEPARATOR", "SET", "SHOW",
    "SIGNAL", "SMALLINT", "SPATIAL", "SPECIFIC", "SQL", "SQLEXCEPTION", "SQLSTATE",
    "SQLWARNING", "SQL_BIG_RESULT", "SQL_CALC_FOUND_ROWS", "SQL_SMALL_RESULT", "SSL",
    "STARTING", "STORED", "STRAIGHT_JOIN", "SYSTEM", "TABLE", "TERMINATED", "THEN", "TINYBLOB",
    "TINYINT", "TINYTEXT", "TO", "TRAILING", "TRIGGER", "TRUE", "UNDO", "UNION", "UNIQUE",
    "UNLOCK", "UNSIGNED", "UPDATE", "USAGE", "USE", "USING", "UTC_DATE", "UTC_TIME",
    "UTC_TIMESTAMP", "VALUES", "VARBINARY", "VARCHAR", "VARCHARACTER", "VARYING", "VIRTUAL",
    "WHEN", "WHERE", "WHILE", "WINDOW", "WITH", "WRITE", "XOR", "YEAR_MONTH", "ZEROFILL",
];

/// 비예약 키워드
pub const NON_RESERVED: &[&str] = &[
    "ACCOUNT", "ACTION", "ACTIVE", "ADMIN", "AFTER", "AGAINST", "AGGREGATE", "ALGORITHM",
    "ALWAYS", "ANY", "ARRAY", "AT", "AUTOEXTEND_SIZE", "AUTO_INCREMENT", "AVG",
    "AVG_ROW_LENGTH", "BACKUP", "BEGIN", "BINLOG", "BIT", "BLOCK", "BOOL", "BOOLEAN", "BTREE",
    "BUCKETS", "BYTE", "CACHE", "CASCADED", "CATALOG_NAME", "CHAIN", "CHANGED", "CHANNEL",
    "CHARSET", "CHECKSUM", "CIPHER", "CLASS_ORIGIN", "CLIENT", "CLONE", "CLOSE", "COALESCE",
    "CODE", "COLLATION", "COLUMNS", "COLUMN_FORMAT", "COLUMN_NAME", "COMMENT", "COMMIT",
    "COMMITTED", "COMPACT", "COMPLETION", "COMPONENT", "COMPRESSED", "COMPRESSION",
    "CONCURRENT", "CONNECTION", "CONSISTENT", "CONSTRAINT_CATALOG", "CONSTRAINT_NAME",
    "CONSTRAINT_SCHEMA", "CONTAINS", "CONTEXT", "CPU", "CURRENT", "CURSOR_NAME", "DATA",
    "DATAFILE", "DATE", "DATETIME", "DAY", "DEALLOCATE", "DEFAULT_AUTH", "DEFINER",
    "DEFINITION", "DELAY_KEY_WRITE", "DESCRIPTION", "DIAGNOSTICS", "DIRECTORY", "DISABLE",
    "DISCARD", "DISK", "DO", "DUMPFILE", "DUPLICATE", "DYNAMIC", "ENABLE", "ENCRYPTION", "END",
    "ENDS", "ENFORCED", "ENGINE", "ENGINES", "ENUM", "ERROR", "ERRORS", "ESCAPE", "EVENT",
    "EVENTS", "EVERY", "EXCHANGE", "EXCLUDE", "EXECUTE", "EXPANSION", "EXPIRE", "EXPORT",
    "EXTENDED", "EXTENT_SIZE", "FAILED_LOGIN_ATTEMPTS", "FAST", "FAULTS", "FIELDS", "FILE",
    "FILTER", "FIRST", "FIXED", "FLUSH", "FOLLOWING", "FOLLOWS", "FORMAT", "FOUND", "FULL",
    "GENERAL", "GEOMETRY", "GEOMETRYCOLLECTION", "GET_FORMAT", "GLOBAL", "GRANTS", "HANDLER",
    "HASH", "HELP", "HISTOGRAM", "HISTORY", "HOST", "HOSTS", "HOUR", "IDENTIFIED", "IMPORT",
    "INACTIVE", "INDEXES", "INITIAL_SIZE", "INSERT_METHOD", "INSTALL", "INSTANCE", "INVISIBLE",
    "INVOKER", "IO", "IO_THREAD", "IPC", "ISOLATION", "ISSUER", "JSON", "JSON_VALUE",
    "KEY_BLOCK_SIZE", "LANGUAGE", "LAST", "LEAVES", "LESS", "LEVEL", "LINESTRING", "LIST",
    "LOCAL", "LOCKED", "LOCKS", "LOGFILE", "LOGS", "MASTER", "MAX_ROWS", "MEDIUM", "MEMBER",
    "MEMORY", "MERGE", "MESSAGE_TEXT", "MICROSECOND", "MIGRATE", "MINUTE", "MIN_ROWS", "MODE",
    "MODIFY", "MONTH", "MULTILINESTRING", "MULTIPOINT", "MULTIPOLYGON", "MUTEX", "MYSQL_ERRNO",
    "NAME", "NAMES", "NATIONAL", "NCHAR", "NDB", "NDBCLUSTER", "NESTED", "NETWORK_NAMESPACE",
    "NEVER", "NEW", "NEXT", "NO", "NODEGROUP", "NONE", "NOWAIT", "NO_WAIT", "NULLS", "NUMBER",
    "NVARCHAR", "OFF", "OFFSET", "OJ", "OLD", "ONE", "ONLY", "OPEN", "OPTIONAL", "OPTIONS",
    "ORDINALITY", "ORGANIZATION", "OTHERS", "OWNER", "PACK_KEYS", "PAGE", "PARSER", "PARTIAL",
    "PARTITIONING", "PARTITIONS", "PASSWORD", "PATH", "PERSIST", "PERSIST_ONLY", "PHASE",
    "PLUGIN", "PLUGINS", "PLUGIN_DIR", "POINT", "POLYGON", "PORT", "PRECEDES", "PRECEDING",
    "PREPARE", "PRESERVE", "PREV", "PRIVILEGES", "PRIVILEGE_CHECKS_USER", "PROCESS",
    "PROCESSLIST", "PROFILE", "PROFILES", "PROXY", "QUARTER", "QUERY", "QUICK", "RANDOM",
    "READ_ONLY", "REBUILD", "RECOVER", "REDO_BUFFER_SIZE", "REDUNDANT", "REFERENCE", "RELAY",
    "RELAYLOG", "RELAY_LOG_FILE", "RELAY_LOG_POS", "RELAY_THREAD", "RELOAD", "REMOVE",
    "REORGANIZE", "REPAIR", "REPEATABLE", "REPLICA", "REPLICAS", "REPLICATE_DO_DB",
    "REPLICATION", "RESET", "RESOURCE", "RESPECT", "RESTART", "RESTORE", "RESUME", "RETAIN",
    "RETURNED_SQLSTATE", "RETURNING", "RETURNS", "REUSE", "REVERSE", "ROLE", "ROLLBACK",
    "ROLLUP", "ROTATE", "ROUTINE", "ROW_COUNT", "ROW_FORMAT", "RTREE", "SAVEPOINT", "SCHEDULE",
    "SCHEMA_NAME", "SECOND", "SECONDARY", "SECURITY", "SERIAL", "SERIALIZABLE", "SERVER",
    "SESSION", "SHARE", "SHARED", "SHUTDOWN", "SIGNED", "SIMPLE", "SKIP", "SLAVE", "SLOW",
    "SNAPSHOT", "SOCKET", "SOME", "SONAME", "SOUNDS", "SOURCE", "SQL_AFTER_GTIDS",
    "SQL_BEFORE_GTIDS", "SQL_BUFFER_RESULT", "SQL_NO_CACHE", "SQL_THREAD", "SRID", "STACKED",
    "START", "STARTS", "STATS_AUTO_RECALC", "STATS_PERSISTENT", "STATS_SAMPLE_PAGES", "STATUS",
    "STOP", "STORAGE", "STREAM", "STRING", "SUBCLASS_ORIGIN", "SUBJECT", "SUBPARTITION",
    "SUBPARTITIONS", "SUPER", "SUSPEND", "SWAPS", "SWITCHES", "TABLES", "TABLESPACE",
    "TABLE_CHECKSUM", "TABLE_NAME", "TEMPORARY", "TEMPTABLE", "TEXT", "THAN", "THREAD_PRIORITY",
    "TIES", "TIME", "TIMESTAMP", "TIMESTAMPADD", "TIMESTAMPDIFF", "TRANSACTION", "TRIGGERS",
    "TRUNCATE", "TYPE", "TYPES", "UNBOUNDED", "UNCOMMITTED", "UNDEFINED", "UNDOFILE",
    "UNDO_BUFFER_SIZE", "UNICODE", "UNINSTALL", "UNKNOWN", "UNTIL", "UPGRADE", "USER",
    "USER_RESOURCES", "USE_FRM", "VALIDATION", "VALUE", "VARIABLES", "VCPU", "VIEW", "VISIBLE",
    "WAIT", "WARNINGS", "WEEK", "WEIGHT_STRING", "WITHOUT", "WORK", "WRAPPER", "X509", "XA",
    "XID", "XML", "YEAR", "ZONE",
];

//! Fixed lookup tables for the tokenized script format.
//!
//! Opcode 0 indexes the keyword table, opcode 1 the built-in function table.
//! Both are pinned by the interpreter the scripts were compiled for; entries
//! are stored upper-cased, the way the token stream references them.

pub(crate) const KEYWORDS: [&str; 45] = [
    "", "AND", "OR", "NOT", "IF", "THEN", "ELSE", "ELSEIF", "ENDIF", "WHILE", "WEND", "DO",
    "UNTIL", "FOR", "NEXT", "TO", "STEP", "IN", "EXITLOOP", "CONTINUELOOP", "SELECT", "CASE",
    "ENDSELECT", "SWITCH", "ENDSWITCH", "CONTINUECASE", "DIM", "REDIM", "LOCAL", "GLOBAL",
    "CONST", "STATIC", "FUNC", "ENDFUNC", "RETURN", "EXIT", "BYREF", "WITH", "ENDWITH", "TRUE",
    "FALSE", "DEFAULT", "NULL", "VOLATILE", "ENUM",
];

pub(crate) const FUNCTIONS: [&str; 406] = [
    "ABS", "ACOS", "ADLIBREGISTER", "ADLIBUNREGISTER", "ASC", "ASCW", "ASIN", "ASSIGN", "ATAN",
    "AUTOITSETOPTION", "AUTOITWINGETTITLE", "AUTOITWINSETTITLE", "BEEP", "BINARY", "BINARYLEN",
    "BINARYMID", "BINARYTOSTRING", "BITAND", "BITNOT", "BITOR", "BITROTATE", "BITSHIFT", "BITXOR",
    "BLOCKINPUT", "BREAK", "CALL", "CDTRAY", "CEILING", "CHR", "CHRW", "CLIPGET", "CLIPPUT",
    "CONSOLEREAD", "CONSOLEWRITE", "CONSOLEWRITEERROR", "CONTROLCLICK", "CONTROLCOMMAND",
    "CONTROLDISABLE", "CONTROLENABLE", "CONTROLFOCUS", "CONTROLGETFOCUS", "CONTROLGETHANDLE",
    "CONTROLGETPOS", "CONTROLGETTEXT", "CONTROLHIDE", "CONTROLLISTVIEW", "CONTROLMOVE",
    "CONTROLSEND", "CONTROLSETTEXT", "CONTROLSHOW", "CONTROLTREEVIEW", "COS", "DEC", "DIRCOPY",
    "DIRCREATE", "DIRGETSIZE", "DIRMOVE", "DIRREMOVE", "DLLCALL", "DLLCALLADDRESS",
    "DLLCALLBACKFREE", "DLLCALLBACKGETPTR", "DLLCALLBACKREGISTER", "DLLCLOSE", "DLLOPEN",
    "DLLSTRUCTCREATE", "DLLSTRUCTGETDATA", "DLLSTRUCTGETPTR", "DLLSTRUCTGETSIZE",
    "DLLSTRUCTSETDATA", "DRIVEGETDRIVE", "DRIVEGETFILESYSTEM", "DRIVEGETLABEL", "DRIVEGETSERIAL",
    "DRIVEGETTYPE", "DRIVEMAPADD", "DRIVEMAPDEL", "DRIVEMAPGET", "DRIVESETLABEL",
    "DRIVESPACEFREE", "DRIVESPACETOTAL", "DRIVESTATUS", "DUMMYSPEEDTEST", "ENVGET", "ENVSET",
    "ENVUPDATE", "EVAL", "EXECUTE", "EXP", "FILECHANGEDIR", "FILECLOSE", "FILECOPY",
    "FILECREATENTFSLINK", "FILECREATESHORTCUT", "FILEDELETE", "FILEEXISTS", "FILEFINDFIRSTFILE",
    "FILEFINDNEXTFILE", "FILEFLUSH", "FILEGETATTRIB", "FILEGETENCODING", "FILEGETLONGNAME",
    "FILEGETPOS", "FILEGETSHORTCUT", "FILEGETSHORTNAME", "FILEGETSIZE", "FILEGETTIME",
    "FILEGETVERSION", "FILEINSTALL", "FILEMOVE", "FILEOPEN", "FILEOPENDIALOG", "FILEREAD",
    "FILEREADLINE", "FILEREADTOARRAY", "FILERECYCLE", "FILERECYCLEEMPTY", "FILESAVEDIALOG",
    "FILESELECTFOLDER", "FILESETATTRIB", "FILESETEND", "FILESETPOS", "FILESETTIME", "FILEWRITE",
    "FILEWRITELINE", "FLOOR", "FTPSETPROXY", "FUNCNAME", "GUICREATE", "GUICTRLCREATEAVI",
    "GUICTRLCREATEBUTTON", "GUICTRLCREATECHECKBOX", "GUICTRLCREATECOMBO",
    "GUICTRLCREATECONTEXTMENU", "GUICTRLCREATEDATE", "GUICTRLCREATEDUMMY", "GUICTRLCREATEEDIT",
    "GUICTRLCREATEGRAPHIC", "GUICTRLCREATEGROUP", "GUICTRLCREATEICON", "GUICTRLCREATEINPUT",
    "GUICTRLCREATELABEL", "GUICTRLCREATELIST", "GUICTRLCREATELISTVIEW",
    "GUICTRLCREATELISTVIEWITEM", "GUICTRLCREATEMENU", "GUICTRLCREATEMENUITEM",
    "GUICTRLCREATEMONTHCAL", "GUICTRLCREATEOBJ", "GUICTRLCREATEPIC", "GUICTRLCREATEPROGRESS",
    "GUICTRLCREATERADIO", "GUICTRLCREATESLIDER", "GUICTRLCREATETAB", "GUICTRLCREATETABITEM",
    "GUICTRLCREATETREEVIEW", "GUICTRLCREATETREEVIEWITEM", "GUICTRLCREATEUPDOWN", "GUICTRLDELETE",
    "GUICTRLGETHANDLE", "GUICTRLGETSTATE", "GUICTRLREAD", "GUICTRLRECVMSG",
    "GUICTRLREGISTERLISTVIEWSORT", "GUICTRLSENDMSG", "GUICTRLSENDTODUMMY", "GUICTRLSETBKCOLOR",
    "GUICTRLSETCOLOR", "GUICTRLSETCURSOR", "GUICTRLSETDATA", "GUICTRLSETDEFBKCOLOR",
    "GUICTRLSETDEFCOLOR", "GUICTRLSETFONT", "GUICTRLSETGRAPHIC", "GUICTRLSETIMAGE",
    "GUICTRLSETLIMIT", "GUICTRLSETONEVENT", "GUICTRLSETPOS", "GUICTRLSETRESIZING",
    "GUICTRLSETSTATE", "GUICTRLSETSTYLE", "GUICTRLSETTIP", "GUIDELETE", "GUIGETCURSORINFO",
    "GUIGETMSG", "GUIGETSTYLE", "GUIREGISTERMSG", "GUISETACCELERATORS", "GUISETBKCOLOR",
    "GUISETCOORD", "GUISETCURSOR", "GUISETFONT", "GUISETHELP", "GUISETICON", "GUISETONEVENT",
    "GUISETSTATE", "GUISETSTYLE", "GUISTARTGROUP", "GUISWITCH", "HEX", "HOTKEYSET",
    "HTTPSETPROXY", "HTTPSETUSERAGENT", "HWND", "INETCLOSE", "INETGET", "INETGETINFO",
    "INETGETSIZE", "INETREAD", "INIDELETE", "INIREAD", "INIREADSECTION", "INIREADSECTIONNAMES",
    "INIRENAMESECTION", "INIWRITE", "INIWRITESECTION", "INPUTBOX", "INT", "ISADMIN", "ISARRAY",
    "ISBINARY", "ISBOOL", "ISDECLARED", "ISDLLSTRUCT", "ISFLOAT", "ISFUNC", "ISHWND", "ISINT",
    "ISKEYWORD", "ISMAP", "ISNUMBER", "ISOBJ", "ISPTR", "ISSTRING", "LOG", "MAPAPPEND",
    "MAPEXISTS", "MAPKEYS", "MAPREMOVE", "MEMGETSTATS", "MOD", "MOUSECLICK", "MOUSECLICKDRAG",
    "MOUSEDOWN", "MOUSEGETCURSOR", "MOUSEGETPOS", "MOUSEMOVE", "MOUSEUP", "MOUSEWHEEL", "MSGBOX",
    "NUMBER", "OBJCREATE", "OBJCREATEINTERFACE", "OBJEVENT", "OBJGET", "OBJNAME",
    "ONAUTOITEXITREGISTER", "ONAUTOITEXITUNREGISTER", "OPT", "PING", "PIXELCHECKSUM",
    "PIXELGETCOLOR", "PIXELSEARCH", "PROCESSCLOSE", "PROCESSEXISTS", "PROCESSGETSTATS",
    "PROCESSLIST", "PROCESSSETPRIORITY", "PROCESSWAIT", "PROCESSWAITCLOSE", "PROGRESSOFF",
    "PROGRESSON", "PROGRESSSET", "PTR", "RANDOM", "REGDELETE", "REGENUMKEY", "REGENUMVAL",
    "REGREAD", "REGWRITE", "ROUND", "RUN", "RUNAS", "RUNASWAIT", "RUNWAIT", "SEND",
    "SENDKEEPACTIVE", "SETERROR", "SETEXTENDED", "SHELLEXECUTE", "SHELLEXECUTEWAIT", "SHUTDOWN",
    "SIN", "SLEEP", "SOUNDPLAY", "SOUNDSETWAVEVOLUME", "SPLASHIMAGEON", "SPLASHOFF",
    "SPLASHTEXTON", "SQRT", "SRANDOM", "STATUSBARGETTEXT", "STDERRREAD", "STDINWRITE",
    "STDIOCLOSE", "STDOUTREAD", "STRING", "STRINGADDCR", "STRINGCOMPARE", "STRINGFORMAT",
    "STRINGFROMASCIIARRAY", "STRINGINSTR", "STRINGISALNUM", "STRINGISALPHA", "STRINGISASCII",
    "STRINGISDIGIT", "STRINGISFLOAT", "STRINGISINT", "STRINGISLOWER", "STRINGISSPACE",
    "STRINGISUPPER", "STRINGISXDIGIT", "STRINGLEFT", "STRINGLEN", "STRINGLOWER", "STRINGMID",
    "STRINGREGEXP", "STRINGREGEXPREPLACE", "STRINGREPLACE", "STRINGREVERSE", "STRINGRIGHT",
    "STRINGSPLIT", "STRINGSTRIPCR", "STRINGSTRIPWS", "STRINGTOASCIIARRAY", "STRINGTOBINARY",
    "STRINGTRIMLEFT", "STRINGTRIMRIGHT", "STRINGUPPER", "TAN", "TCPACCEPT", "TCPCLOSESOCKET",
    "TCPCONNECT", "TCPLISTEN", "TCPNAMETOIP", "TCPRECV", "TCPSEND", "TCPSHUTDOWN", "TCPSTARTUP",
    "TIMERDIFF", "TIMERINIT", "TOOLTIP", "TRAYCREATEITEM", "TRAYCREATEMENU", "TRAYGETMSG",
    "TRAYITEMDELETE", "TRAYITEMGETHANDLE", "TRAYITEMGETSTATE", "TRAYITEMGETTEXT",
    "TRAYITEMSETONEVENT", "TRAYITEMSETSTATE", "TRAYITEMSETTEXT", "TRAYSETCLICK", "TRAYSETICON",
    "TRAYSETONEVENT", "TRAYSETPAUSEICON", "TRAYSETSTATE", "TRAYSETTOOLTIP", "TRAYTIP", "UBOUND",
    "UDPBIND", "UDPCLOSESOCKET", "UDPOPEN", "UDPRECV", "UDPSEND", "UDPSHUTDOWN", "UDPSTARTUP",
    "VARGETTYPE", "WINACTIVATE", "WINACTIVE", "WINCLOSE", "WINEXISTS", "WINFLASH",
    "WINGETCARETPOS", "WINGETCLASSLIST", "WINGETCLIENTSIZE", "WINGETHANDLE", "WINGETPOS",
    "WINGETPROCESS", "WINGETSTATE", "WINGETTEXT", "WINGETTITLE", "WINKILL", "WINLIST",
    "WINMENUSELECTITEM", "WINMINIMIZEALL", "WINMINIMIZEALLUNDO", "WINMOVE", "WINSETONTOP",
    "WINSETSTATE", "WINSETTITLE", "WINSETTRANS", "WINWAIT", "WINWAITACTIVE", "WINWAITCLOSE",
    "WINWAITNOTACTIVE",
];
